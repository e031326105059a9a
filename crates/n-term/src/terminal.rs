// SPDX-License-Identifier: MIT
//
// Terminal control — raw mode for a single keystroke, and RAII cleanup.
//
// Safety: This module necessarily uses `unsafe` for termios (tcgetattr,
// tcsetattr), fcntl (F_GETFL / F_SETFL), isatty and raw fd reads. These are
// the standard POSIX interfaces for terminal control; there is no safe
// alternative. Each unsafe block is minimal.
#![allow(unsafe_code)]
//
// Prompts stay in cooked mode while they draw and drop into raw mode only
// for the duration of one key read. `RawMode` is the guard for that window:
// it snapshots the termios attributes and the file status flags, switches
// to raw, and puts both back when dropped: on success, on error, and
// during unwinding. Guards never nest.
//
// The panic hook covers what unwinding cannot: a prompt hides the cursor
// while it runs, and a panic mid-prompt would otherwise leave it hidden.
// The hook writes the show-cursor sequence straight to fd 2 (bypassing
// Rust's stderr lock) and restores any termios a live guard saved, then
// delegates to the original handler.

use std::io;
#[cfg(unix)]
use std::os::unix::io::RawFd;
use std::sync::Once;
#[cfg(unix)]
use std::sync::Mutex;

use crate::ansi::CURSOR_SHOW;
use crate::input::{self, ByteSource, Key, KeySource};

// ─── Terminal Queries ───────────────────────────────────────────────────────

/// Check whether stdin is connected to a terminal (TTY).
#[cfg(unix)]
#[must_use]
pub fn is_tty() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) != 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn is_tty() -> bool {
    false
}

// ─── Panic-Safe Terminal Restore ────────────────────────────────────────────

/// Global backup of the termios saved by the live [`RawMode`] guard.
///
/// The guard owns its own copy, but the panic hook can't reach it. This
/// backup behind a [`Mutex`] lets the hook restore
/// cooked mode without the guard.
#[cfg(unix)]
static TERMIOS_BACKUP: Mutex<Option<(RawFd, libc::termios)>> = Mutex::new(None);

/// Restore termios from the global backup. Best-effort, ignores errors.
#[cfg(unix)]
fn restore_termios_from_backup() {
    if let Ok(guard) = TERMIOS_BACKUP.lock() {
        if let Some((fd, ref original)) = *guard {
            unsafe {
                let _ = libc::tcsetattr(fd, libc::TCSANOW, original);
            }
        }
    }
}

/// Panic hook guard — ensures the hook is installed at most once per process.
static PANIC_HOOK_INSTALLED: Once = Once::new();

/// Install a panic hook that shows the cursor and restores cooked mode
/// before printing the panic message.
///
/// Idempotent: only the first call installs anything.
pub fn install_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let original = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            emergency_restore();

            #[cfg(unix)]
            restore_termios_from_backup();

            original(info);
        }));
    });
}

/// Write the show-cursor sequence directly to stderr's file descriptor.
fn emergency_restore() {
    #[cfg(unix)]
    unsafe {
        let _ = libc::write(
            libc::STDERR_FILENO,
            CURSOR_SHOW.as_ptr().cast::<libc::c_void>(),
            CURSOR_SHOW.len(),
        );
    }

    #[cfg(not(unix))]
    {
        use std::io::Write;
        let _ = io::stderr().write_all(CURSOR_SHOW.as_bytes());
    }
}

// ─── RawMode ────────────────────────────────────────────────────────────────

/// Raw-mode guard over one terminal file descriptor.
///
/// While alive, the terminal delivers every byte immediately without echo.
/// The first call to [`read_pending`](ByteSource::read_pending) also turns
/// on `O_NONBLOCK`. Dropping the guard restores the original attributes
/// and file status flags.
#[cfg(unix)]
pub struct RawMode {
    fd: RawFd,
    /// Attributes before entering raw mode.
    original: libc::termios,
    /// `F_GETFL` flags before any non-blocking switch.
    flags: libc::c_int,
    nonblocking: bool,
}

#[cfg(unix)]
impl RawMode {
    /// Save the current state of `fd` and switch it to raw mode.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the attributes or flags cannot be read or
    /// the raw attributes cannot be applied. Nothing is changed in that case.
    pub fn enter(fd: RawFd) -> io::Result<Self> {
        unsafe {
            let mut termios: libc::termios = std::mem::zeroed();
            if libc::tcgetattr(fd, &raw mut termios) != 0 {
                return Err(io::Error::last_os_error());
            }

            let flags = libc::fcntl(fd, libc::F_GETFL);
            if flags < 0 {
                return Err(io::Error::last_os_error());
            }

            let original = termios;

            // cfmakeraw equivalent: disable all line processing.
            termios.c_iflag &= !(libc::IGNBRK
                | libc::BRKINT
                | libc::PARMRK
                | libc::ISTRIP
                | libc::INLCR
                | libc::IGNCR
                | libc::ICRNL
                | libc::IXON);
            termios.c_oflag &= !libc::OPOST;
            termios.c_lflag &=
                !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);
            termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
            termios.c_cflag |= libc::CS8;

            // VMIN=1, VTIME=0: read() blocks until at least 1 byte available.
            termios.c_cc[libc::VMIN] = 1;
            termios.c_cc[libc::VTIME] = 0;

            if libc::tcsetattr(fd, libc::TCSAFLUSH, &raw const termios) != 0 {
                return Err(io::Error::last_os_error());
            }

            if let Ok(mut guard) = TERMIOS_BACKUP.lock() {
                *guard = Some((fd, original));
            }

            Ok(Self {
                fd,
                original,
                flags,
                nonblocking: false,
            })
        }
    }

    fn set_nonblocking(&mut self) -> io::Result<()> {
        if self.nonblocking {
            return Ok(());
        }
        if unsafe { libc::fcntl(self.fd, libc::F_SETFL, self.flags | libc::O_NONBLOCK) } < 0 {
            return Err(io::Error::last_os_error());
        }
        self.nonblocking = true;
        Ok(())
    }

    /// One `read(2)` of a single byte. `Ok(None)` means end of input.
    fn read_one(&self) -> io::Result<Option<u8>> {
        let mut byte = 0u8;
        let n = unsafe { libc::read(self.fd, (&raw mut byte).cast::<libc::c_void>(), 1) };
        match n {
            1 => Ok(Some(byte)),
            0 => Ok(None),
            _ => Err(io::Error::last_os_error()),
        }
    }
}

#[cfg(unix)]
impl ByteSource for RawMode {
    fn read_byte(&mut self) -> io::Result<u8> {
        self.read_one()?
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "terminal input closed"))
    }

    fn read_pending(&mut self) -> io::Result<Option<u8>> {
        self.set_nonblocking()?;
        match self.read_one() {
            Ok(byte) => Ok(byte),
            Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted) => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(unix)]
impl Drop for RawMode {
    fn drop(&mut self) {
        unsafe {
            if libc::tcsetattr(self.fd, libc::TCSADRAIN, &raw const self.original) != 0 {
                log::debug!("restoring termios failed: {}", io::Error::last_os_error());
            }
            if libc::fcntl(self.fd, libc::F_SETFL, self.flags) < 0 {
                log::debug!("restoring file flags failed: {}", io::Error::last_os_error());
            }
        }

        // Restored; the hook has nothing left to do.
        if let Ok(mut guard) = TERMIOS_BACKUP.lock() {
            *guard = None;
        }
    }
}

// ─── TtyKeys ────────────────────────────────────────────────────────────────

/// Keystrokes from the controlling terminal on stdin.
///
/// Each [`next_key`](KeySource::next_key) enters raw mode, decodes one
/// keystroke and leaves raw mode again before returning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TtyKeys;

impl KeySource for TtyKeys {
    #[cfg(unix)]
    fn next_key(&mut self) -> io::Result<Key> {
        let mut raw = RawMode::enter(libc::STDIN_FILENO)?;
        input::read_key(&mut raw)
    }

    #[cfg(not(unix))]
    fn next_key(&mut self) -> io::Result<Key> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "raw key input requires a unix terminal",
        ))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_tty_does_not_panic() {
        let _ = is_tty();
    }

    #[test]
    fn panic_hook_install_is_idempotent() {
        install_panic_hook();
        install_panic_hook();
        assert!(PANIC_HOOK_INSTALLED.is_completed());
    }

    #[cfg(unix)]
    mod unix {
        use super::super::*;
        use std::ptr;
        use std::sync::{MutexGuard, PoisonError};

        /// Tests that inspect `TERMIOS_BACKUP` run one at a time.
        static SERIAL: Mutex<()> = Mutex::new(());

        fn serial() -> MutexGuard<'static, ()> {
            SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
        }

        fn termios_of(fd: RawFd) -> libc::termios {
            unsafe {
                let mut t: libc::termios = std::mem::zeroed();
                assert_eq!(libc::tcgetattr(fd, &raw mut t), 0);
                t
            }
        }

        fn flags_of(fd: RawFd) -> libc::c_int {
            let flags = unsafe { libc::fcntl(fd, libc::F_GETFL) };
            assert!(flags >= 0);
            flags
        }

        /// A pipe is not a terminal, so raw mode must refuse it and leave
        /// nothing behind in the global backup.
        #[test]
        fn raw_mode_on_pipe_fails_cleanly() {
            let _serial = serial();
            let mut fds = [0 as libc::c_int; 2];
            assert_eq!(unsafe { libc::pipe(fds.as_mut_ptr()) }, 0);

            let err = RawMode::enter(fds[0]).err().expect("pipe is not a tty");
            assert_eq!(err.raw_os_error(), Some(libc::ENOTTY));
            assert!(TERMIOS_BACKUP.lock().unwrap().is_none());

            unsafe {
                libc::close(fds[0]);
                libc::close(fds[1]);
            }
        }

        #[test]
        fn raw_mode_on_bad_fd_fails() {
            assert!(RawMode::enter(-1).is_err());
        }

        /// A full read on a pseudo-terminal, including the non-blocking
        /// drain after ESC, leaves attributes and file flags as they were.
        #[test]
        fn raw_mode_restores_pty_after_read_and_drain() {
            let _serial = serial();
            let (mut master, mut slave) = (0, 0);
            let rc = unsafe {
                libc::openpty(
                    &raw mut master,
                    &raw mut slave,
                    ptr::null_mut(),
                    ptr::null_mut(),
                    ptr::null_mut(),
                )
            };
            assert_eq!(rc, 0);

            let before = termios_of(slave);
            let flags_before = flags_of(slave);
            assert_eq!(flags_before & libc::O_NONBLOCK, 0);

            {
                let mut raw = RawMode::enter(slave).unwrap();
                assert!(TERMIOS_BACKUP.lock().unwrap().is_some());
                assert_eq!(termios_of(slave).c_lflag & libc::ICANON, 0);

                let sent = b"\x1bq";
                let n = unsafe { libc::write(master, sent.as_ptr().cast(), sent.len()) };
                assert_eq!(n, 2);

                let key = input::read_key(&mut raw).unwrap();
                assert_eq!(key.as_bytes().first(), Some(&input::ESC));
                raw.read_pending().unwrap();
                assert_ne!(flags_of(slave) & libc::O_NONBLOCK, 0);
            }

            let after = termios_of(slave);
            assert_eq!(after.c_lflag, before.c_lflag);
            assert_eq!(after.c_iflag, before.c_iflag);
            assert_eq!(after.c_oflag, before.c_oflag);
            assert_eq!(after.c_cflag, before.c_cflag);
            assert_eq!(flags_of(slave), flags_before);
            assert!(TERMIOS_BACKUP.lock().unwrap().is_none());

            unsafe {
                libc::close(slave);
                libc::close(master);
            }
        }
    }
}

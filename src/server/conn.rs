use mio::Token;
use netbuf::Buf;

use super::tcp::ServerCore;

/// Completion callback for a write, fired once every byte has been
/// handed to the kernel.
pub type WriteComplete =
    Box<dyn for<'a, 'b> FnOnce(&'a mut Connection<'b>) + Send>;

/// One queued outbound write: the still-unsent suffix plus an optional
/// completion callback. The buffer's consume offset is the cursor.
pub(crate) struct WriteTask {
    pub data: Buf,
    pub done: Option<WriteComplete>,
}

impl WriteTask {
    pub(crate) fn new(data: &[u8], done: Option<WriteComplete>) -> WriteTask {
        let mut buf = Buf::new();
        buf.extend(data);
        WriteTask { data: buf, done }
    }
}

/// Borrowed handle to one accepted connection.
///
/// The handle is a token plus a reference into the manager, valid for
/// the duration of the callback it was passed to. Calls against a
/// connection that is already scheduled for close are dropped silently
/// when the close queue is drained.
pub struct Connection<'a> {
    core: &'a mut ServerCore,
    token: Token,
}

impl<'a> Connection<'a> {
    pub(crate) fn new(core: &'a mut ServerCore, token: Token)
        -> Connection<'a>
    {
        Connection { core, token }
    }

    /// Stable identifier of this connection for per-connection state.
    pub fn token(&self) -> Token {
        self.token
    }

    /// Submit bytes for transmission.
    ///
    /// Attempts the send right away when nothing is queued ahead;
    /// whatever the socket does not accept is owned by a write task and
    /// finished on later write-readiness. `done` fires after the last
    /// byte is written, or never if the connection closes first.
    pub fn write(&mut self, data: &[u8], done: Option<WriteComplete>) {
        self.core.try_write(self.token, data, done);
    }

    /// Schedule this connection for close.
    ///
    /// Takes effect when the current event batch has been handled;
    /// until then the handle stays safe to use.
    pub fn close(&mut self) {
        self.core.schedule_close(self.token);
    }
}

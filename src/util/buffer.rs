//! Pre-generated random text buffers
//!
//! Output bytes come from a small pool of buffers filled once at startup, so
//! large volumes can be written without drawing a random number per
//! character. Each buffer holds characters from a fixed 65-symbol alphabet and
//! ends with a newline, which makes every buffer one line of log output.

use rand::Rng;
use std::io;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Characters used to fill the buffers: letters, digits, `.`, `-` and space
pub const ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.- ";

/// Fixed set of random, newline-terminated buffers
///
/// Buffers are read-only after construction. Picks are independent and may
/// return the same buffer repeatedly.
#[derive(Debug, Clone)]
pub struct RandomAlphabetPool {
    buffers: Vec<Vec<u8>>,
}

impl RandomAlphabetPool {
    /// Create a pool of `pool_size` buffers of `block_size` bytes each
    ///
    /// # Panics
    ///
    /// Panics if `pool_size` or `block_size` is zero.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, pool_size: usize, block_size: usize) -> Self {
        assert!(pool_size > 0, "Pool size must be greater than 0");
        assert!(block_size > 0, "Block size must be greater than 0");

        let buffers = (0..pool_size)
            .map(|_| {
                let mut buf: Vec<u8> = (0..block_size)
                    .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
                    .collect();
                buf[block_size - 1] = b'\n';
                buf
            })
            .collect();

        Self { buffers }
    }

    /// Pick a buffer uniformly at random
    #[inline]
    pub fn pick_buffer<R: Rng + ?Sized>(&self, rng: &mut R) -> &[u8] {
        &self.buffers[rng.gen_range(0..self.buffers.len())]
    }

    /// Write exactly `n` bytes drawn from the pool to `sink`
    ///
    /// When fewer than a full buffer's worth of bytes remain, the tail of a
    /// buffer is written so the output still ends on a newline. Short writes
    /// are continued; a sink that accepts zero bytes is an error.
    pub async fn write_n<R, W>(&self, rng: &mut R, sink: &mut W, mut n: usize) -> io::Result<()>
    where
        R: Rng + ?Sized,
        W: AsyncWrite + Unpin + ?Sized,
    {
        while n > 0 {
            let buf = self.pick_buffer(rng);
            let chunk = if buf.len() > n {
                &buf[buf.len() - n..]
            } else {
                buf
            };

            let written = sink.write(chunk).await?;
            if written == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "output sink accepted no bytes",
                ));
            }
            n -= written;
        }
        Ok(())
    }

    /// Number of buffers in the pool
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    /// Always false; a pool holds at least one buffer
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    /// Iterate over the buffers
    pub fn buffers(&self) -> impl Iterator<Item = &[u8]> {
        self.buffers.iter().map(Vec::as_slice)
    }
}

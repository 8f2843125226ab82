use std::io::{self, Seek, SeekFrom};

pub trait SeekExt: Seek {
    /// Runs `f` with the stream positioned at `position`, then moves the stream back to where it
    /// was before. The position is restored even when seeking or `f` fails, in which case the
    /// original error is returned.
    fn with_position<T, E>(
        &mut self,
        position: u64,
        f: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<io::Error>;
}

impl<S: Seek> SeekExt for S {
    fn with_position<T, E>(
        &mut self,
        position: u64,
        f: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<io::Error>,
    {
        let return_position = self.stream_position()?;

        let result = match self.seek(SeekFrom::Start(position)) {
            Ok(_) => f(self),
            Err(e) => Err(e.into()),
        };

        let restored = self.seek(SeekFrom::Start(return_position));
        let value = result?;
        restored?;

        Ok(value)
    }
}

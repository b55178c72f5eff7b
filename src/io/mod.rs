//! # Reading vectors and matrices from text
//!
//! The text format is the one produced by the `Display` implementations: values separated by
//! whitespace, in order of increasing index. A matrix is read row by row, only the stored
//! columns of each row are present. Line breaks carry no meaning while reading.
use std::fmt::Display;
use std::io::Read;
use std::str::FromStr;

use crate::data::linear_algebra::error::Error;
use crate::data::linear_algebra::matrix::TriangularMatrix;
use crate::data::linear_algebra::vector::Vector;
use crate::io::error::ImportError;

pub mod error;

/// Fill an existing value with values read from text.
///
/// The shape of the value is not changed: exactly as many tokens are consumed as there are values
/// stored.
pub trait ReadText {
    /// Read values from a stream of tokens.
    ///
    /// # Errors
    ///
    /// `Error::Parse` if the tokens run out or a token can't be parsed. Values read before the
    /// failing token keep their new value.
    fn read_tokens<'a>(&mut self, tokens: &mut impl Iterator<Item = &'a str>) -> Result<(), Error>;

    /// Read values from whitespace separated text.
    ///
    /// Tokens after the ones needed are ignored.
    fn read_text(&mut self, text: &str) -> Result<(), Error> {
        self.read_tokens(&mut text.split_whitespace())
    }
}

impl<F: FromStr> ReadText for Vector<F>
where
    F::Err: Display,
{
    fn read_tokens<'a>(&mut self, tokens: &mut impl Iterator<Item = &'a str>) -> Result<(), Error> {
        let start_index = self.start_index();
        read_values(start_index, self.iter_mut(), tokens)
    }
}

impl<F: FromStr> ReadText for TriangularMatrix<F>
where
    F::Err: Display,
{
    fn read_tokens<'a>(&mut self, tokens: &mut impl Iterator<Item = &'a str>) -> Result<(), Error> {
        for (i, mut row) in self.rows_mut().enumerate() {
            let start_index = row.start_index();
            read_values(start_index, row.iter_mut(), &mut *tokens).map_err(|error| match error {
                Error::Parse(description) => Error::Parse(format!("row {}: {}", i, description)),
                other => other,
            })?;
        }

        Ok(())
    }
}

/// Parse one token for each value, labelling values with their logical index in messages.
fn read_values<'a, 'b, F: FromStr + 'b>(
    start_index: usize,
    values: impl Iterator<Item = &'b mut F>,
    tokens: &mut impl Iterator<Item = &'a str>,
) -> Result<(), Error>
where
    F::Err: Display,
{
    for (index, value) in (start_index..).zip(values) {
        let token = tokens.next()
            .ok_or_else(|| Error::Parse(format!("missing value for index {}", index)))?;
        *value = token.parse()
            .map_err(|error| Error::Parse(format!(
                "could not parse \"{}\" at index {}: {}", token, index, error,
            )))?;
    }

    Ok(())
}

/// Read a whole stream and fill a value with its contents.
///
/// # Errors
///
/// When the stream can't be read, or its contents don't hold enough valid values, an error type
/// is returned.
pub fn read_from<T: ReadText>(value: &mut T, mut reader: impl Read) -> Result<(), ImportError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    value.read_text(&text)?;

    Ok(())
}

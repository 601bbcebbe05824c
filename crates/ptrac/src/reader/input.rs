// standard library
use std::collections::BTreeMap;
use std::io::BufRead;

// crate modules
use crate::core::{InputFormat, Keyword};
use crate::error::{FormatError, Result};
use crate::parsers::*;

// external crates
use log::{debug, warn};

use super::LineSource;

// ! Input format block
impl<R: BufRead> LineSource<R> {
    pub(super) fn parse_input_format(&mut self) -> Result<InputFormat> {
        debug!("----------------------------");
        debug!(" Parsing Input Format block ");
        debug!("----------------------------");

        // values may be written as reals and run over several lines
        let mut values = vector_of_truncated(self.next_line()?)?.1;
        self.extend_until(&mut values, 1, vector_of_truncated)?;

        let n_keywords = values[0];
        debug!("n keywords  = {n_keywords}");

        // every keyword is a count followed by that many values
        let mut keywords = BTreeMap::new();
        let mut i = 1;
        for keyword in Keyword::ALL {
            self.extend_until(&mut values, i + 1, vector_of_truncated)?;
            let n = usize::try_from(values[i]).map_err(|_| FormatError::NegativeCount(values[i]))?;
            i += 1;

            self.extend_until(&mut values, i + n, vector_of_truncated)?;
            let entries = values[i..i + n].to_vec();
            i += n;

            debug!("{:<11} = {:?}", keyword.name(), entries);
            keywords.insert(keyword, entries);
        }

        if values.len() > i {
            warn!(
                "Ignoring {} trailing values after the input format block",
                values.len() - i
            );
        }

        debug!("Input format read successful");
        Ok(InputFormat {
            n_keywords,
            keywords,
        })
    }
}

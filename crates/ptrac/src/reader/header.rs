// standard library
use std::io::BufRead;

// crate modules
use crate::core::Header;
use crate::error::{FormatError, Result};
use crate::parsers::*;

// external crates
use log::debug;

use super::LineSource;

// ! Header block
impl<R: BufRead> LineSource<R> {
    pub(super) fn parse_header(&mut self) -> Result<Header> {
        debug!("----------------------");
        debug!(" Parsing Header block ");
        debug!("----------------------");

        // some versions open the file with a bare -1
        let mut line = self.next_line()?;
        if is_sentinel(line) {
            debug!("Skipped leading -1 line");
            line = self.next_line()?;
        }

        let found = line.split_whitespace().count();
        if found < METADATA_TOKENS {
            return Err(FormatError::TooFewTokens {
                expected: METADATA_TOKENS,
                found,
            }
            .into());
        }

        // code, version, load date, run date, run time
        let (_, m) = metadata(line)?;
        let code = m.code.to_string();
        let version = m.version;
        let load_date = date(m.load_date)?;
        let run_date = date_time(m.run_date, m.run_time)?;
        debug!("Code name   = {code:?}");
        debug!("Version     = {version}");
        debug!("Load date   = {load_date}");
        debug!("Run date    = {run_date}");

        // the title is always one line of free text
        let title = self.next_line()?.trim().to_string();
        debug!("Title       = {title:?}");

        debug!("Header read successful");
        Ok(Header {
            code,
            version,
            load_date,
            run_date,
            title,
        })
    }
}

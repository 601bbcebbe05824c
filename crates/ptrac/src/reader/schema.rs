// standard library
use std::io::BufRead;

// crate modules
use crate::core::EventFormat;
use crate::error::{FormatError, Result};
use crate::parsers::*;

// external crates
use log::{debug, trace, warn};

use super::LineSource;

/// Counts line: n_nps followed by an (integer, real) pair for five categories
const REQUIRED_COUNTS: usize = 11;

/// Counts line including the optional ipt and byte size values
const MAXIMUM_COUNTS: usize = 13;

// ! Event format block
impl<R: BufRead> LineSource<R> {
    pub(super) fn parse_event_format(&mut self) -> Result<EventFormat> {
        debug!("----------------------------");
        debug!(" Parsing Event Format block ");
        debug!("----------------------------");

        let counts = vector_of_i64(self.next_line()?)?.1;
        trace!("Counts      = {counts:?}");
        if counts.len() < REQUIRED_COUNTS {
            return Err(FormatError::TooFewTokens {
                expected: REQUIRED_COUNTS,
                found: counts.len(),
            }
            .into());
        } else if counts.len() > MAXIMUM_COUNTS {
            return Err(FormatError::UnexpectedLength {
                expected: MAXIMUM_COUNTS,
                found: counts.len(),
            }
            .into());
        }

        let count = |i: usize| -> Result<usize> {
            Ok(usize::try_from(counts[i]).map_err(|_| FormatError::NegativeCount(counts[i]))?)
        };

        // integer and real line counts of a category
        let pair = |i: usize| -> Result<usize> {
            Ok(count(i)?
                .checked_add(count(i + 1)?)
                .ok_or(FormatError::CountOverflow)?)
        };

        let mut format = EventFormat {
            n_nps: count(0)?,
            n_src_ev: pair(1)?,
            n_bnk_ev: pair(3)?,
            n_sur_ev: pair(5)?,
            n_col_ev: pair(7)?,
            n_ter_ev: pair(9)?,
            ipt_single_transport: counts.get(11).copied(),
            output_byte_size: counts.get(12).copied(),
            ..Default::default()
        };

        if format.ipt_single_transport.is_none() || format.output_byte_size.is_none() {
            warn!("Event format block does not give the particle type and byte size");
        }

        // collect the flat list of field codes for every category
        let total = format.total()?;
        let mut ids = Vec::new();
        self.extend_until(&mut ids, total, vector_of_i64)?;
        if ids.len() != total {
            return Err(FormatError::UnexpectedLength {
                expected: total,
                found: ids.len(),
            }
            .into());
        }

        // slice in file order
        let mut ids = ids.into_iter();
        let mut take = |n: usize| ids.by_ref().take(n).collect::<Vec<i64>>();
        format.id_nps = take(format.n_nps);
        format.id_src_ev = take(format.n_src_ev);
        format.id_bnk_ev = take(format.n_bnk_ev);
        format.id_sur_ev = take(format.n_sur_ev);
        format.id_col_ev = take(format.n_col_ev);
        format.id_ter_ev = take(format.n_ter_ev);

        debug!("id_nps      = {:?}", format.id_nps);
        debug!("id_src_ev   = {:?}", format.id_src_ev);
        debug!("id_bnk_ev   = {:?}", format.id_bnk_ev);
        debug!("id_sur_ev   = {:?}", format.id_sur_ev);
        debug!("id_col_ev   = {:?}", format.id_col_ev);
        debug!("id_ter_ev   = {:?}", format.id_ter_ev);

        debug!("Event format read successful");
        Ok(format)
    }
}

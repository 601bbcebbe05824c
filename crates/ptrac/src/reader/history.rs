// standard library
use std::io::BufRead;
use std::iter::FusedIterator;

// crate modules
use crate::core::{Event, EventField, EventFormat, History, SummaryField, END_OF_HISTORY};
use crate::error::{FormatError, Result};
use crate::parsers::*;

// external crates
use log::trace;

use super::{LineSource, PtracReader};

/// Lazy iterator over the histories of a [PtracReader]
///
/// Created by [PtracReader::events]. Each item is one decoded [History], or
/// the error that stopped decoding. Nothing is yielded after an error or the
/// end of the event stream.
#[derive(Debug)]
pub struct Histories<'a, R> {
    reader: &'a mut PtracReader<R>,
    done: bool,
}

impl<'a, R: BufRead> Histories<'a, R> {
    pub(super) fn new(reader: &'a mut PtracReader<R>) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Histories<'_, R> {
    type Item = Result<History>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.reader.next_history() {
            Ok(Some(history)) => Some(Ok(history)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for Histories<'_, R> {}

// ! Event stream
impl<R: BufRead> LineSource<R> {
    /// Decode one history, or `None` at the end of the stream
    pub(super) fn read_history(&mut self, format: &EventFormat) -> Result<Option<History>> {
        // an empty summary line (or no line at all) is the end of the stream
        let summary = match self.try_next_line()? {
            Some(line) => vector_of_i64(line)?.1,
            None => return Ok(None),
        };
        if summary.is_empty() {
            trace!("Empty summary line {}, end of stream", self.line_number);
            return Ok(None);
        }

        if summary.len() != format.id_nps.len() {
            return Err(FormatError::UnexpectedLength {
                expected: format.id_nps.len(),
                found: summary.len(),
            }
            .into());
        }

        // type of the first event is given by the summary line
        let mut next_event_type = summary[format.first_event_index()?];

        let mut history = History::default();
        for (&code, &value) in format.id_nps.iter().zip(&summary) {
            if let Some(field) = SummaryField::from_code(code)? {
                history.set(field, value);
            }
        }
        trace!("History {:?} at line {}", history.nps, self.line_number);

        // every event gives the type of the one after it
        while next_event_type != END_OF_HISTORY {
            let (event, lookahead) = self.read_event(format, next_event_type)?;
            history.events.push(event);
            next_event_type = lookahead;
        }

        trace!("History {:?} has {} events", history.nps, history.events.len());
        Ok(Some(history))
    }

    /// Decode one event from its pair of lines, returning the next event type
    fn read_event(&mut self, format: &EventFormat, event_type: i64) -> Result<(Event, i64)> {
        let mut event = Event::new(event_type)?;
        let ids = format.ids(event.kind().category());

        let mut values = vector_of_f64(self.next_line()?)?.1;
        values.extend(vector_of_f64(self.next_line()?)?.1);

        if values.len() != ids.len() {
            return Err(FormatError::UnexpectedLength {
                expected: ids.len(),
                found: values.len(),
            }
            .into());
        }

        let Some(&lookahead) = values.first() else {
            return Err(FormatError::TooFewTokens {
                expected: 1,
                found: 0,
            }
            .into());
        };

        // the leading value pairs with the lookahead code and sets nothing
        for (&code, &value) in ids.iter().zip(&values) {
            if let Some(field) = EventField::from_code(code)? {
                event.set(field, value);
            }
        }
        trace!("{event_type:>6} event, line {}", self.line_number);

        Ok((event, lookahead as i64))
    }
}

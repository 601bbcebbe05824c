//! Integration tests for decoding the event stream

use ntrack_ptrac::{
    read_ptrac, read_ptrac_target, BankDirection, Error, EventKind, FormatError, History,
    LifecycleError, PtracReader,
};
use rstest::{fixture, rstest};

const FIXTURE: &str = "./data/two_histories.ptrac";

/// Header, input format and event format blocks shared by the inline tests
///
/// Summary codes are nps and first event type. Collision events carry a
/// second lookahead code in the middle of the record.
const PREAMBLE: &str = "\
mcnp6 6 01/01/15 01/01/15 12:00:00
Inline test problem
13 0 0 0 0 0 0 0 0 0 0 0 0 0
2 0 0 0 0 0 0 2 2 2 2 0 4
1 2
7 7 20 26
7 8 20 26
";

fn document(stream: &str) -> String {
    format!("{PREAMBLE}{stream}")
}

#[fixture]
fn histories() -> Vec<History> {
    read_ptrac(FIXTURE).unwrap()
}

#[rstest]
fn two_histories_decoded(histories: Vec<History>) {
    assert_eq!(histories.len(), 2);
    assert_eq!(histories[0].nps, Some(1));
    assert_eq!(histories[1].nps, Some(2));

    let kinds = |h: &History| h.events.iter().map(|e| e.kind()).collect::<Vec<_>>();
    assert_eq!(
        kinds(&histories[0]),
        vec![EventKind::Collision, EventKind::Termination]
    );
    assert_eq!(
        kinds(&histories[1]),
        vec![
            EventKind::Bank {
                code: 3,
                direction: BankDirection::Forward
            },
            EventKind::Termination
        ]
    );
    assert_eq!(histories[1].events[0].event_type, 2003);
}

#[rstest]
fn collision_fields(histories: Vec<History>) {
    let event = &histories[0].events[0];

    // declared by id_col_ev = 7 8 11 17 18 20 21 22 26 27
    assert_eq!(event.node, Some(1));
    assert_eq!(event.reaction, Some(2));
    assert_eq!(event.cell, Some(10));
    assert_eq!(event.material, Some(3));
    assert_eq!(event.position(), Some([1.0, 2.0, 3.0]));
    assert_eq!(event.energy, Some(14.1));
    assert_eq!(event.weight, Some(0.5));

    // everything else is absent
    assert_eq!(event.source_type, None);
    assert_eq!(event.cross_section, None);
    assert_eq!(event.surface, None);
    assert_eq!(event.angle, None);
    assert_eq!(event.termination, None);
    assert_eq!(event.branch, None);
    assert_eq!(event.particle, None);
    assert_eq!(event.collisions, None);
    assert_eq!(event.direction(), None);
    assert_eq!(event.time, None);
}

#[rstest]
fn termination_fields(histories: Vec<History>) {
    let event = &histories[0].events[1];

    // declared by id_ter_ev = 7 8 14 15 17 20 21 22 26 27 28
    assert_eq!(event.node, Some(2));
    assert_eq!(event.termination, Some(12));
    assert_eq!(event.branch, Some(1));
    assert_eq!(event.cell, Some(10));
    assert_eq!(event.position(), Some([1.5, 2.5, 3.5]));
    assert_eq!(event.energy, Some(13.0));
    assert_eq!(event.weight, Some(0.5));
    assert_eq!(event.time, Some(1.0e-8));

    assert_eq!(event.reaction, None);
    assert_eq!(event.material, None);
    assert_eq!(event.particle, None);
}

#[rstest]
fn bank_fields(histories: Vec<History>) {
    let event = &histories[1].events[0];

    // declared by id_bnk_ev = 7 8 16 17 20 21 22 23 24 25 26 27 28
    assert_eq!(event.node, Some(1));
    assert_eq!(event.particle, Some(2));
    assert_eq!(event.cell, Some(20));
    assert_eq!(event.position(), Some([0.0, 0.0, 0.0]));
    assert_eq!(event.direction(), Some([0.0, 0.0, 1.0]));
    assert_eq!(event.energy, Some(2.0));
    assert_eq!(event.weight, Some(1.0));
    assert_eq!(event.time, Some(0.0));

    assert_eq!(event.material, None);
    assert_eq!(event.termination, None);
}

#[rstest]
fn particle_track(histories: Vec<History>) {
    assert_eq!(
        histories[0].track(),
        vec![[1.0, 2.0, 3.0], [1.5, 2.5, 3.5]]
    );
}

#[rstest]
#[case(1, 2)] // collision history
#[case(2, 2)] // bank history
fn target_history(#[case] nps: u64, #[case] n_events: usize) {
    let history = read_ptrac_target(FIXTURE, nps).unwrap();
    assert_eq!(history.nps, Some(nps));
    assert_eq!(history.events.len(), n_events);
}

#[test]
fn target_history_missing() {
    let result = read_ptrac_target(FIXTURE, 3);
    assert!(matches!(result, Err(Error::HistoryNotFound(3))));
}

#[test]
fn every_event_category() {
    // one value per record line, each category declares a different field
    let histories = read_ptrac("./data/every_category.ptrac").unwrap();
    assert_eq!(histories.len(), 1);

    let history = &histories[0];
    assert_eq!(history.nps, Some(1));
    assert_eq!(history.cell, Some(10));
    assert_eq!(history.surface, Some(20));
    assert_eq!(history.jptal, Some(30));
    assert_eq!(history.tal, Some(40));

    let kinds = history.events.iter().map(|e| e.kind()).collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            EventKind::Source,
            EventKind::Bank {
                code: 1,
                direction: BankDirection::Backward
            },
            EventKind::Surface,
            EventKind::Collision,
            EventKind::Termination,
        ]
    );

    let [source, bank, surface, collision, termination] = &history.events[..] else {
        panic!("expected five events, found {}", history.events.len());
    };

    assert_eq!(source.source_type, Some(3));
    assert_eq!(bank.event_type, -2001);
    assert_eq!(bank.particle, Some(2));

    // surface events take their codes from the surface array only
    assert_eq!(surface.surface, Some(15));
    assert_eq!(surface.reaction, None);
    assert_eq!(surface.termination, None);

    assert_eq!(collision.reaction, Some(102));
    assert_eq!(collision.surface, None);
    assert_eq!(termination.termination, Some(12));
    assert_eq!(termination.surface, None);
}

#[test]
fn empty_summary_line_ends_stream() {
    let text = document("\n1 9000\n");
    let mut reader = PtracReader::open(text.as_bytes()).unwrap();

    let histories = reader.events().unwrap().collect::<Vec<_>>();
    assert!(histories.is_empty());
    assert_eq!(reader.histories_read(), 0);
}

#[test]
fn history_without_events() {
    let text = document("7 9000\n");
    let mut reader = PtracReader::open(text.as_bytes()).unwrap();

    let history = reader.next_history().unwrap().unwrap();
    assert_eq!(history.nps, Some(7));
    assert!(history.events.is_empty());
    assert!(reader.next_history().unwrap().is_none());
}

#[test]
fn unused_code_leaves_field_unset() {
    // collision record: 7 7 20 26, the second value pairs with a lookahead code
    let text = document("1 4000\n9000 55\n1.5 2.0\n");
    let histories = PtracReader::open(text.as_bytes())
        .unwrap()
        .events()
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    let event = &histories[0].events[0];
    assert_eq!(event.x, Some(1.5));
    assert_eq!(event.energy, Some(2.0));
    assert_eq!(event.node, None);
    assert_eq!(event.cell, None);
    assert_eq!(event.collisions, None);
}

#[test]
fn missing_end_of_history() {
    let text = document("1 4000\n4000 1\n1.0 2.0\n");
    let mut reader = PtracReader::open(text.as_bytes()).unwrap();
    let mut events = reader.events().unwrap();

    let error = events.next().unwrap().unwrap_err();
    assert!(matches!(
        error,
        Error::Format(FormatError::UnexpectedEndOfStream)
    ));

    // nothing more is produced after an error
    assert!(events.next().is_none());
}

#[test]
fn unrecognised_event_category() {
    let text = document("1 6000\n9000 1\n1.0 2.0\n");
    let mut reader = PtracReader::open(text.as_bytes()).unwrap();

    let error = reader.next_history().unwrap_err();
    assert!(matches!(
        error,
        Error::Format(FormatError::UnrecognisedEventCategory(6000))
    ));
}

#[test]
fn event_record_length_mismatch() {
    let text = document("1 4000\n9000 1 5\n1.0 2.0\n");
    let mut reader = PtracReader::open(text.as_bytes()).unwrap();

    let error = reader.next_history().unwrap_err();
    assert!(matches!(
        error,
        Error::Format(FormatError::UnexpectedLength {
            expected: 4,
            found: 5
        })
    ));
}

#[test]
fn sentinel_code_missing() {
    let text = "\
mcnp6 6 01/01/15 01/01/15 12:00:00
No first event code
13 0 0 0 0 0 0 0 0 0 0 0 0 0
2 0 0 0 0 0 0 0 0 0 0 0 4
1 3
1 10
";
    let mut reader = PtracReader::open(text.as_bytes()).unwrap();

    let error = reader.next_history().unwrap_err();
    assert!(matches!(
        error,
        Error::Format(FormatError::SentinelNotFound)
    ));
}

#[test]
fn lifecycle_order() {
    let text = document("1 9000\n");
    let mut reader = PtracReader::new(text.as_bytes());

    // events are not available before the format blocks
    assert!(matches!(
        reader.events(),
        Err(Error::Lifecycle(LifecycleError::NotParsed))
    ));
    assert!(reader.header().is_none());

    reader.parse().unwrap();
    assert!(matches!(
        reader.parse(),
        Err(Error::Lifecycle(LifecycleError::AlreadyParsed))
    ));

    assert_eq!(reader.events().unwrap().count(), 1);
    assert_eq!(reader.histories_read(), 1);

    // the stream can not be restarted
    assert!(matches!(
        reader.events(),
        Err(Error::Lifecycle(LifecycleError::StreamExhausted))
    ));
    assert!(reader.next_history().unwrap().is_none());
    assert!(matches!(
        reader.parse(),
        Err(Error::Lifecycle(LifecycleError::AlreadyParsed))
    ));
}

#[test]
fn failed_reader_is_unusable() {
    let mut reader = PtracReader::new("mcnp6 6 01/01/15\n".as_bytes());
    assert!(reader.parse().is_err());

    assert!(matches!(
        reader.parse(),
        Err(Error::Lifecycle(LifecycleError::Failed))
    ));
    assert!(matches!(
        reader.events(),
        Err(Error::Lifecycle(LifecycleError::Failed))
    ));
}

#[test]
fn absent_fields_not_serialised() {
    let history = read_ptrac_target(FIXTURE, 1).unwrap();
    let json = serde_json::to_value(&history.events[0]).unwrap();

    assert_eq!(json["type"], 4000);
    assert_eq!(json["material"], 3);
    assert!(json.get("surface").is_none());
    assert!(json.get("time").is_none());
}

#[test]
fn display_summary() {
    let history = read_ptrac_target(FIXTURE, 2).unwrap();
    let text = history.to_string();

    assert!(text.starts_with("History 2"));
    assert!(text.contains("Events        2"));
    assert!(text.contains("Event 2003 (Bank)"));
    assert!(!text.contains("Material"));
}

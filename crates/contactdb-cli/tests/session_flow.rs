use contactdb_cli::session::{Request, Response, Session};
use contactdb_core::{ContactStore, DuplicatePolicy, StoreConfig};

fn run(session: &mut Session, script: &str) -> String {
    let mut out = Vec::new();
    session.run(script.as_bytes(), &mut out, false).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn add_search_delete_list() {
    let mut session = Session::default();
    let out = run(
        &mut session,
        "add Alice | 111-2222 | a@x.com\n\
         add Bob | 111-3333 | b@x.com\n\
         search 111-2\n\
         delete A@X.com\n\
         list\n",
    );

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        [
            "added: Alice (111-2222) - a@x.com",
            "added: Bob (111-3333) - b@x.com",
            "by name: -",
            "by phone: Alice",
            "by email: -",
            "deleted: Alice (111-2222) - a@x.com",
            "Bob (111-3333) - b@x.com",
        ]
    );
    assert_eq!(session.store().len(), 1);
}

#[test]
fn quit_stops_reading() {
    let mut session = Session::default();
    let out = run(&mut session, "add A | 1 | a@x\nquit\nadd B | 2 | b@x\n");
    assert!(out.ends_with("bye\n"));
    assert_eq!(session.into_store().len(), 1);
}

#[test]
fn bad_lines_do_not_end_the_session() {
    let mut session = Session::default();
    let out = run(&mut session, "add nope\n\n# comment\nteleport\ndelete ghost@x.com\nlist\n");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        [
            "usage: add <name> | <phone> | <email>",
            "unknown command: teleport",
            "no contact with email ghost@x.com",
            "no contacts",
        ]
    );
}

#[test]
fn duplicate_rejection_is_reported() {
    let store = ContactStore::new(StoreConfig {
        duplicate_policy: DuplicatePolicy::Reject,
        ..StoreConfig::default()
    });
    let mut session = Session::new(store);
    session.execute(Request::Add {
        name: "A".into(),
        phone: "1".into(),
        email: "a@x.com".into(),
    });
    let resp = session.execute(Request::Add {
        name: "B".into(),
        phone: "2".into(),
        email: "A@x.com".into(),
    });
    assert!(matches!(resp, Response::Rejected(_)));
    assert_eq!(resp.to_string(), "rejected: duplicate email: A@x.com");
}

#[test]
fn stats_response() {
    let mut session = Session::default();
    run(&mut session, "add A | 1 | a@x\nadd B | 2 | b@x\n");
    let text = session.execute(Request::Stats).to_string();
    assert_eq!(text, "records: 2\ndistinct names: 2\ntree height: 2");
}

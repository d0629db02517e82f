//! Contract tests shared by every `StreamTable` implementation.

use std::{
    collections::{BTreeMap, HashMap},
    num::NonZeroUsize,
};

use rstest::rstest;

use super::{BoundedStreamTable, StreamTable};
use crate::{
    error::TableFull,
    frame::StreamId,
    http::{FullHttpResponse, HttpMessage, HttpVersion, Status},
};

fn response(code: u16) -> HttpMessage {
    FullHttpResponse::new(HttpVersion::http_1_1(), Status::from_code(code)).into()
}

fn code_of(message: &HttpMessage) -> u16 {
    message.as_response().expect("response").status().code()
}

#[rstest]
#[case::hash_map(Box::new(HashMap::<StreamId, HttpMessage>::new()) as Box<dyn StreamTable>)]
#[case::btree_map(Box::new(BTreeMap::<StreamId, HttpMessage>::new()) as Box<dyn StreamTable>)]
#[case::bounded(Box::new(BoundedStreamTable::new(NonZeroUsize::new(8).expect("non-zero"))) as Box<dyn StreamTable>)]
fn tables_honour_put_get_remove_contract(#[case] mut table: Box<dyn StreamTable>) {
    let id = StreamId::new(5);
    assert!(table.is_empty());
    assert_eq!(table.put(id, response(200)), Ok(None));
    assert_eq!(table.get(id).map(code_of), Some(200));

    let previous = table
        .put(id, response(404))
        .expect("put accepted")
        .expect("previous message");
    assert_eq!(code_of(&previous), 200);
    assert_eq!(table.len(), 1);

    table
        .get_mut(id)
        .expect("pending entry")
        .content_mut()
        .extend_from_slice(b"abc");
    assert_eq!(table.get(id).map(HttpMessage::content), Some(&b"abc"[..]));

    assert_eq!(table.remove(id).map(|m| code_of(&m)), Some(404));
    assert!(table.remove(id).is_none());
    assert!(table.get(StreamId::new(7)).is_none());
}

#[rstest]
#[case::hash_map(Box::new(HashMap::<StreamId, HttpMessage>::new()) as Box<dyn StreamTable>)]
#[case::btree_map(Box::new(BTreeMap::<StreamId, HttpMessage>::new()) as Box<dyn StreamTable>)]
fn drain_returns_sorted_ids(#[case] mut table: Box<dyn StreamTable>) {
    for raw in [9, 1, 5] {
        table.put(StreamId::new(raw), response(200)).expect("unbounded");
    }
    assert_eq!(
        table.drain_ids(),
        [StreamId::new(1), StreamId::new(5), StreamId::new(9)]
    );
    assert!(table.is_empty());
}

#[test]
fn bounded_table_refuses_new_streams_when_full() {
    let max = NonZeroUsize::new(2).expect("non-zero");
    let mut table = BoundedStreamTable::new(max);
    table.put(StreamId::new(1), response(200)).expect("room");
    table.put(StreamId::new(3), response(200)).expect("room");

    assert_eq!(
        table.put(StreamId::new(5), response(200)),
        Err(TableFull {
            stream_id: StreamId::new(5),
            max_streams: max,
        })
    );
    assert_eq!(table.len(), 2);
    assert!(table.get(StreamId::new(5)).is_none());

    let replaced = table.put(StreamId::new(3), response(404)).expect("replacing is allowed");
    assert_eq!(replaced.map(|m| code_of(&m)), Some(200));

    table.remove(StreamId::new(1));
    assert_eq!(table.put(StreamId::new(5), response(200)), Ok(None));
    assert_eq!(table.len(), 2);
}

#[test]
fn bounded_table_wraps_any_table() {
    let max = NonZeroUsize::new(1).expect("non-zero");
    let mut table = BoundedStreamTable::with_inner(BTreeMap::<StreamId, HttpMessage>::new(), max);
    table.put(StreamId::new(7), response(200)).expect("room");
    assert!(table.put(StreamId::new(9), response(200)).is_err());
    assert_eq!(table.max_streams(), max);
    assert_eq!(
        table.into_inner().keys().copied().collect::<Vec<_>>(),
        [StreamId::new(7)]
    );
}

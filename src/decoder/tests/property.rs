//! Generated checks for body reassembly and the content limit.

use proptest::{
    collection::vec,
    prelude::{Strategy, any},
    prop_assert,
    prop_assert_eq,
    test_runner::{Config as ProptestConfig, RngAlgorithm, TestCaseError, TestRng, TestRunner},
};
use rstest::rstest;

use crate::{
    config::DecoderConfig,
    decoder::{DecodeOutput, SpdyHttpDecoder},
    error::DecodeError,
    frame::SpdyVersion,
    test_helpers::{data, request_headers, syn_stream},
};

fn deterministic_runner(cases: u32) -> TestRunner {
    let config = ProptestConfig {
        cases,
        ..ProptestConfig::default()
    };
    let rng = TestRng::deterministic_rng(RngAlgorithm::ChaCha);
    TestRunner::new_with_rng(config, rng)
}

fn chunk_strategy(max_chunk: usize, chunks: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    vec(vec(any::<u8>(), 0..=max_chunk), 1..=chunks)
}

#[rstest]
#[case(64, 96)]
#[case(4096, 64)]
fn chunked_bodies_reassemble_or_fail_at_limit(#[case] limit: usize, #[case] cases: u32) {
    let mut runner = deterministic_runner(cases);
    let strategy = chunk_strategy(limit / 4 + 1, 8);

    runner
        .run(&strategy, |chunks| {
            let mut decoder = SpdyHttpDecoder::new(DecoderConfig::new(3, limit))
                .map_err(|err| TestCaseError::fail(format!("config rejected: {err}")))?;
            let mut out = DecodeOutput::new();
            let total: usize = chunks.iter().map(Vec::len).sum();
            let last = chunks.len() - 1;

            let opened = decoder.decode(
                syn_stream(1, request_headers(SpdyVersion::V3, "POST", "/"), false),
                &mut out,
            );
            prop_assert!(opened.is_ok());

            let mut result = Ok(());
            for (index, chunk) in chunks.iter().enumerate() {
                result = decoder.decode(data(1, chunk, index == last), &mut out);
                if result.is_err() {
                    break;
                }
            }

            if total <= limit {
                prop_assert!(result.is_ok());
                let message = out
                    .messages()
                    .next()
                    .ok_or_else(|| TestCaseError::fail("missing message".to_owned()))?;
                let expected = chunks.concat();
                prop_assert_eq!(message.content(), expected.as_slice());
                prop_assert_eq!(message.content_length(), Some(total));
            } else {
                prop_assert!(
                    matches!(result, Err(DecodeError::ContentTooLarge { .. })),
                    "expected ContentTooLarge, got {:?}",
                    result
                );
                prop_assert_eq!(out.messages().count(), 0);
            }
            prop_assert_eq!(decoder.pending_streams(), 0);
            Ok(())
        })
        .expect("generated bodies should respect the content limit");
}

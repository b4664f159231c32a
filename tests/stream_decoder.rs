use serde_json::json;
use tokio::io::AsyncWriteExt;
use watchdiff::stream::StreamDecoder;

#[tokio::test]
async fn back_to_back_objects_without_framing() {
    let input: &[u8] = br#"{"a":1}{"b":2} {"c":3}"#;
    let mut decoder = StreamDecoder::new(input);

    assert_eq!(decoder.next_object().await.unwrap().unwrap(), json!({"a":1}));
    assert_eq!(decoder.next_object().await.unwrap().unwrap(), json!({"b":2}));
    assert_eq!(decoder.next_object().await.unwrap().unwrap(), json!({"c":3}));
    assert!(decoder.next_object().await.is_none());
}

#[tokio::test]
async fn object_split_across_reads_is_reassembled() {
    let (client, server) = tokio::io::duplex(1024);
    let mut decoder = StreamDecoder::new(server);

    let writer = tokio::spawn(async move {
        let mut client = client;
        client.write_all(br#"{"name":"we"#).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        client.write_all(br#"b","n":1}"#).await.unwrap();
        // Dropping the client closes the stream.
    });

    assert_eq!(
        decoder.next_object().await.unwrap().unwrap(),
        json!({"name": "web", "n": 1})
    );
    assert!(decoder.next_object().await.is_none());
    writer.await.unwrap();
}

#[tokio::test]
async fn malformed_chunk_yields_one_error_then_resyncs() {
    let input: &[u8] = br#"{"a":1} {"a":} {"a":2}"#;
    let mut decoder = StreamDecoder::new(input);

    assert_eq!(decoder.next_object().await.unwrap().unwrap(), json!({"a":1}));
    assert!(decoder.next_object().await.unwrap().is_err());
    assert_eq!(decoder.next_object().await.unwrap().unwrap(), json!({"a":2}));
    assert!(decoder.next_object().await.is_none());
}

#[tokio::test]
async fn garbage_between_objects_is_skipped_with_one_error() {
    let input: &[u8] = b"{\"a\":1}\ntotal garbage here\n{\"a\":2}";
    let mut decoder = StreamDecoder::new(input);

    assert_eq!(decoder.next_object().await.unwrap().unwrap(), json!({"a":1}));
    assert!(decoder.next_object().await.unwrap().is_err());
    assert_eq!(decoder.next_object().await.unwrap().unwrap(), json!({"a":2}));
    assert!(decoder.next_object().await.is_none());
}

#[tokio::test]
async fn truncated_final_object_is_an_error_then_end() {
    let input: &[u8] = br#"{"a":1}{"b":"#;
    let mut decoder = StreamDecoder::new(input);

    assert_eq!(decoder.next_object().await.unwrap().unwrap(), json!({"a":1}));
    assert!(decoder.next_object().await.unwrap().is_err());
    assert!(decoder.next_object().await.is_none());
}

#[tokio::test]
async fn whitespace_only_stream_ends_cleanly() {
    let input: &[u8] = b"  \n\t ";
    let mut decoder = StreamDecoder::new(input);
    assert!(decoder.next_object().await.is_none());
}

#[tokio::test]
async fn empty_stream_ends_immediately() {
    let input: &[u8] = b"";
    let mut decoder = StreamDecoder::new(input);
    assert!(decoder.next_object().await.is_none());
}

#[tokio::test]
async fn decodes_from_a_real_file() {
    use std::io::Write as _;

    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    write!(tmp, "{}", r#"{"a":1}{"a":2}"#).unwrap();

    let file = tokio::fs::File::open(tmp.path()).await.unwrap();
    let mut decoder = StreamDecoder::new(file);

    assert_eq!(decoder.next_object().await.unwrap().unwrap(), json!({"a":1}));
    assert_eq!(decoder.next_object().await.unwrap().unwrap(), json!({"a":2}));
    assert!(decoder.next_object().await.is_none());
}

#[tokio::test]
async fn non_object_values_decode_too() {
    // The decoder is value-agnostic; framing is whatever JSON self-delimits.
    let input: &[u8] = br#"[1,2] "text" 7"#;
    let mut decoder = StreamDecoder::new(input);

    assert_eq!(decoder.next_object().await.unwrap().unwrap(), json!([1, 2]));
    assert_eq!(decoder.next_object().await.unwrap().unwrap(), json!("text"));
    assert_eq!(decoder.next_object().await.unwrap().unwrap(), json!(7));
    assert!(decoder.next_object().await.is_none());
}

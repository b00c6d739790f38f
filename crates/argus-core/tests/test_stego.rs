use argus_core::protocol::{parse_reply, EncodeReply};
use argus_core::stego::{DownloadReference, EncodeReport};

fn encode_reply(encrypted: bool) -> EncodeReply {
    let body = format!(
        r#"{{
            "success": true,
            "message": "Data successfully hidden in image",
            "image_data": "data:image/png;base64,aGVsbG8=",
            "download_filename": "encoded_photo.png",
            "metadata": {{
                "original_size": [800, 600],
                "data_length": 5,
                "capacity_used": "0.01%",
                "encrypted": {encrypted}
            }}
        }}"#
    );
    parse_reply(body.as_bytes()).unwrap()
}

#[test]
fn test_encode_report_decodes_inline_preview() {
    let report = EncodeReport::from_reply(encode_reply(false)).unwrap();
    assert_eq!(report.preview_png, b"hello");
    assert_eq!(report.message, "Data successfully hidden in image");
}

#[test]
fn test_encode_report_keeps_token_opaque() {
    let report = EncodeReport::from_reply(encode_reply(false)).unwrap();
    assert_eq!(report.download.as_str(), "encoded_photo.png");
}

#[test]
fn test_metadata_lines_unencrypted() {
    let report = EncodeReport::from_reply(encode_reply(false)).unwrap();
    let lines = report.metadata_lines();
    assert_eq!(
        lines,
        vec![
            "Original Size: 800 x 600",
            "Data Length: 5 characters",
            "Capacity Used: 0.01%",
            "Not Encrypted",
        ]
    );
}

#[test]
fn test_metadata_lines_encrypted_badge() {
    let report = EncodeReport::from_reply(encode_reply(true)).unwrap();
    assert_eq!(report.metadata_lines()[3], "Encrypted");
}

#[test]
fn test_encode_report_rejects_bad_data_url() {
    let mut reply = encode_reply(false);
    reply.image_data = "not a data url".to_string();
    assert!(EncodeReport::from_reply(reply).is_err());
}

#[test]
fn test_download_reference_displays_verbatim() {
    let token = DownloadReference::new("encoded_a b%20c.png");
    assert_eq!(token.to_string(), "encoded_a b%20c.png");
}

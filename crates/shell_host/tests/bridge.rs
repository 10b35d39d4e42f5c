use pretty_assertions::assert_eq;
use shell_core::{Msg, UploadCallback};
use shell_host::{delivery_script, parse_message, BridgeMessage, UploadPayload};

#[test]
fn chooser_message_becomes_chooser_request() {
    let message =
        parse_message(r#"{"kind":"chooser","token":3,"accept":["image/*",".pdf"]}"#).unwrap();
    assert_eq!(
        message,
        BridgeMessage::Chooser {
            token: 3,
            accept: vec!["image/*".to_string(), ".pdf".to_string()],
        }
    );
    assert_eq!(
        message.into_msg(),
        Msg::ChooserRequested {
            callback: UploadCallback::new(3),
            accept: vec!["image/*".to_string(), ".pdf".to_string()],
        }
    );
}

#[test]
fn accept_list_is_optional() {
    let message = parse_message(r#"{"kind":"chooser","token":1}"#).unwrap();
    assert_eq!(
        message,
        BridgeMessage::Chooser {
            token: 1,
            accept: Vec::new()
        }
    );
}

#[test]
fn progress_and_back_messages() {
    assert_eq!(
        parse_message(r#"{"kind":"progress","percent":70}"#)
            .unwrap()
            .into_msg(),
        Msg::ProgressChanged(70)
    );
    assert_eq!(
        parse_message(r#"{"kind":"back"}"#).unwrap().into_msg(),
        Msg::BackRequested
    );
}

#[test]
fn malformed_messages_are_rejected() {
    assert!(parse_message("ping").is_err());
    assert!(parse_message(r#"{"kind":"teleport"}"#).is_err());
    assert!(parse_message(r#"{"kind":"progress","percent":-5}"#).is_err());
}

#[test]
fn empty_delivery_passes_null() {
    let script = delivery_script(9, None).unwrap();
    assert_eq!(
        script,
        "window.__avalancheShell && window.__avalancheShell.deliver(9, null);"
    );
}

#[test]
fn file_delivery_embeds_escaped_json() {
    let payload = UploadPayload {
        name: "quote\"d.txt".to_string(),
        mime: "text/plain".to_string(),
        data: "aGk=".to_string(),
    };
    let script = delivery_script(2, Some(&[payload])).unwrap();
    assert_eq!(
        script,
        r#"window.__avalancheShell && window.__avalancheShell.deliver(2, [{"name":"quote\"d.txt","mime":"text/plain","data":"aGk="}]);"#
    );
}

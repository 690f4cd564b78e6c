use serde_json::json;

use studioflow::command::Command;
use studioflow::document::{EditorStatus, ProjectStatus};

#[test]
fn tags_are_screaming_snake_case() {
    let cmd = Command::AssignVideoGeneration {
        channel_id: "c1".into(),
        project_id: "p1".into(),
        editor_id: "e1".into(),
    };
    let value = serde_json::to_value(&cmd).unwrap();
    assert_eq!(value["type"], "ASSIGN_VIDEO_GENERATION");
    assert_eq!(cmd.kind(), "ASSIGN_VIDEO_GENERATION");
}

#[test]
fn payload_fields_are_camel_case() {
    let cmd = Command::AddProject {
        channel_id: "c1".into(),
        project_name: "ep1".into(),
        title_id: "t1".into(),
    };
    let value = serde_json::to_value(&cmd).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "ADD_PROJECT",
            "payload": {
                "channelId": "c1",
                "projectName": "ep1",
                "titleId": "t1",
            }
        })
    );
}

#[test]
fn known_commands_round_trip() {
    let commands = vec![
        Command::AddChannel {
            name: "True Stories".into(),
            niche: "History".into(),
            sub_niche: "WW2".into(),
            language: studioflow::document::Language::English,
        },
        Command::UpdateProjectStatus {
            channel_id: "c1".into(),
            project_id: "p1".into(),
            status: ProjectStatus::Editing,
        },
        Command::AddTitles {
            channel_id: "c1".into(),
            titles: vec!["A".into(), "B".into()],
        },
        Command::StopVideoGeneration {
            channel_id: "c1".into(),
            editor_id: "e1".into(),
        },
        Command::UpdateEditorStatus {
            channel_id: "c1".into(),
            editor_id: "e1".into(),
            status: EditorStatus::Free,
            current_project_id: None,
        },
    ];
    for cmd in commands {
        let wire = serde_json::to_string(&cmd).unwrap();
        let back: Command = serde_json::from_str(&wire).unwrap();
        assert_eq!(back, cmd, "round trip for {}", cmd.kind());
    }
}

#[test]
fn update_editor_status_omits_absent_current_project() {
    let cmd = Command::UpdateEditorStatus {
        channel_id: "c1".into(),
        editor_id: "e1".into(),
        status: EditorStatus::Free,
        current_project_id: None,
    };
    let value = serde_json::to_value(&cmd).unwrap();
    assert!(value["payload"].get("currentProjectId").is_none());

    // And the field deserializes as None when the front-end leaves it out.
    let back: Command = serde_json::from_value(json!({
        "type": "UPDATE_EDITOR_STATUS",
        "payload": { "channelId": "c1", "editorId": "e1", "status": "Free" }
    }))
    .unwrap();
    assert_eq!(back, cmd);
}

#[test]
fn unrecognized_tags_deserialize_to_unknown() {
    let back: Command = serde_json::from_value(json!({
        "type": "EXPORT_REPORT",
        "payload": { "format": "csv" }
    }))
    .unwrap();
    assert_eq!(back, Command::Unknown);

    let back: Command = serde_json::from_str(r#"{"type": "SYNC_TO_CLOUD"}"#).unwrap();
    assert_eq!(back, Command::Unknown);
}

#[test]
fn channel_id_accessor_covers_scoped_commands() {
    let scoped = Command::DeleteTitle {
        channel_id: "c1".into(),
        title_id: "t1".into(),
    };
    assert_eq!(scoped.channel_id(), Some("c1"));

    let global = Command::LoadState(Default::default());
    assert_eq!(global.channel_id(), None);
    assert_eq!(Command::Unknown.channel_id(), None);
}

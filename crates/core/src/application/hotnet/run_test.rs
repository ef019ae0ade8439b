//! Unit tests for the run use case (mock container runner)

use super::*;
use crate::port::container_runner::mocks::{MockBehavior, MockContainerRunner};
use std::path::Path;

struct Inputs {
    _dir: tempfile::TempDir,
    scores: PathBuf,
    edges: PathBuf,
    index: PathBuf,
    output: PathBuf,
}

fn inputs() -> Inputs {
    let dir = tempfile::tempdir().unwrap();
    let input_dir = dir.path().join("input");
    std::fs::create_dir_all(&input_dir).unwrap();

    let scores = input_dir.join("scores.txt");
    let edges = input_dir.join("edges.txt");
    let index = input_dir.join("index.txt");
    std::fs::write(&scores, "A\t1.0\nB\t2.0\n").unwrap();
    std::fs::write(&edges, "1\t2\n").unwrap();
    std::fs::write(&index, "1\tA\n2\tB\n").unwrap();

    let output = dir.path().join("output").join("nested").join("raw-pathway.txt");

    Inputs {
        _dir: dir,
        scores,
        edges,
        index,
        output,
    }
}

fn request(i: &Inputs) -> RunRequest {
    RunRequest::new(&i.scores, &i.edges, &i.index, &i.output)
}

#[tokio::test]
async fn test_missing_arguments_never_start_container() {
    let i = inputs();
    let runner = MockContainerRunner::new_writing("A\tB\n");
    let settings = ContainerSettings::default();

    let variants = [
        RunRequest {
            scores: None,
            ..request(&i)
        },
        RunRequest {
            edge_list: None,
            ..request(&i)
        },
        RunRequest {
            index: None,
            ..request(&i)
        },
        RunRequest {
            output_file: None,
            ..request(&i)
        },
    ];

    for req in variants {
        let err = execute(&runner, &settings, req).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("arguments are missing"));
    }

    assert_eq!(runner.call_count(), 0);
}

#[tokio::test]
async fn test_missing_argument_names_listed() {
    let runner = MockContainerRunner::new_writing("");
    let err = execute(&runner, &ContainerSettings::default(), RunRequest::default())
        .await
        .unwrap_err();

    assert!(err
        .to_string()
        .contains("scores, edge_list, index, output_file"));
}

#[tokio::test]
async fn test_run_renames_result_to_output_file() {
    let i = inputs();
    let runner = MockContainerRunner::new_writing("A\tB\n");
    let settings = ContainerSettings::default();

    let outcome = execute(&runner, &settings, request(&i)).await.unwrap();

    assert_eq!(outcome.output_file, i.output);
    assert_eq!(std::fs::read_to_string(&i.output).unwrap(), "A\tB\n");
    assert_eq!(outcome.container_log, "mock output");
    let out_dir = i.output.parent().unwrap();
    assert!(!out_dir.join(RESULT_FILE_NAME).exists());
}

#[tokio::test]
async fn test_invocation_maps_every_path() {
    let i = inputs();
    let runner = MockContainerRunner::new_writing("A\tB\n");
    let settings = ContainerSettings::default();

    execute(
        &runner,
        &settings,
        request(&i).with_framework(ContainerFramework::Singularity),
    )
    .await
    .unwrap();

    let invocations = runner.invocations();
    assert_eq!(invocations.len(), 1);
    let inv = &invocations[0];

    assert_eq!(inv.framework, ContainerFramework::Singularity);
    assert_eq!(inv.image, "docker.io/reedcompbio/hhn");
    assert_eq!(inv.working_dir, "/spras");
    assert_eq!(inv.volumes.len(), 4);
    assert_eq!(&inv.command[..2], &["bash", "/HHN/hhn.sh"]);

    let flags: Vec<&str> = inv.command[2..].iter().step_by(2).map(String::as_str).collect();
    assert_eq!(flags, vec!["-s", "-e", "-i", "-o"]);

    let values: Vec<&str> = inv.command[3..].iter().step_by(2).map(String::as_str).collect();
    assert!(values.iter().all(|v| v.starts_with("/spras/")));
    assert!(values[0].ends_with("/scores.txt"));
    assert!(values[1].ends_with("/edges.txt"));
    assert!(values[2].ends_with("/index.txt"));
    assert!(values[3].ends_with("/nested/hhn-results.txt"));
}

#[tokio::test]
async fn test_missing_result_is_external_tool_failure() {
    let i = inputs();
    std::fs::create_dir_all(i.output.parent().unwrap()).unwrap();
    std::fs::write(&i.output, "PREVIOUS\tRUN\n").unwrap();
    let runner = MockContainerRunner::new(MockBehavior::NoOutput);

    let err = execute(&runner, &ContainerSettings::default(), request(&i))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ExternalTool(_)));
    assert!(err.to_string().contains(RESULT_FILE_PATTERN));
    assert!(!i.output.exists());
}

#[tokio::test]
async fn test_stale_result_not_reused() {
    let i = inputs();
    let out_dir = i.output.parent().unwrap();
    std::fs::create_dir_all(out_dir).unwrap();
    std::fs::write(out_dir.join(RESULT_FILE_NAME), "OLD\tEDGE\n").unwrap();

    let runner = MockContainerRunner::new(MockBehavior::NoOutput);
    let err = execute(&runner, &ContainerSettings::default(), request(&i))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ExternalTool(_)));
    assert!(!out_dir.join(RESULT_FILE_NAME).exists());
}

#[tokio::test]
async fn test_zero_hash_length_rejected_before_container() {
    let i = inputs();
    let runner = MockContainerRunner::new_writing("A\tB\n");
    let settings = ContainerSettings {
        hash_length: 0,
        ..Default::default()
    };

    let err = execute(&runner, &settings, request(&i)).await.unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(runner.call_count(), 0);
}

#[tokio::test]
async fn test_container_failure_propagates() {
    let i = inputs();
    let runner = MockContainerRunner::new(MockBehavior::Fail("segfault".to_string()));

    let err = execute(&runner, &ContainerSettings::default(), request(&i))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Container(_)));
    assert!(err.to_string().contains("segfault"));
}

#[test]
fn test_from_args_treats_blank_as_missing() {
    let mut args = AlgorithmArgs::new();
    args.insert("scores".to_string(), "s.txt".to_string());
    args.insert("edge_list".to_string(), "e.txt".to_string());
    args.insert("index".to_string(), "  ".to_string());
    args.insert("output_file".to_string(), "out/raw.txt".to_string());

    let req = RunRequest::from_args(&args, ContainerFramework::Docker);

    assert_eq!(req.scores.as_deref(), Some(Path::new("s.txt")));
    assert!(req.index.is_none());
    assert_eq!(req.output_file.as_deref(), Some(Path::new("out/raw.txt")));
}

//! End-to-end CLI tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const GUIDE: &str = r#"---
title: "Demo Course"
---

# Module 1: Basics

#### Objectives

* Understand the platform
* Install the tooling

## Activity 1-1: Intro

Welcome to the course.

#### Task 1: Say Hello

# Module 2: Advanced

## Activity 2-1: Deploy
"#;

const SLIDE_CONTENT: &str = "# Module 1\n* activity 1\n  * key point\n";

fn write_inputs(dir: &TempDir) {
    std::fs::write(dir.path().join("guide.md"), GUIDE).unwrap();
    std::fs::write(dir.path().join("slides.md"), SLIDE_CONTENT).unwrap();
}

fn run_args(dir: &TempDir) -> Vec<String> {
    let p = |name: &str| dir.path().join(name).to_string_lossy().to_string();
    vec![
        p("guide.md"),
        p("slides.md"),
        p("out/slides.md"),
        p("out/outline.md"),
        p("out/titled.md"),
        p("out/topics.md"),
        p("out/agenda.md"),
    ]
}

#[test]
fn help_exits_without_transforming() {
    Command::cargo_bin("coursegen")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("coursegen"));
}

#[test]
fn missing_guide_is_fatal() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("coursegen")
        .unwrap()
        .args(run_args(&dir))
        .assert()
        .failure()
        .stderr(predicate::str::contains("input file not found"));

    assert!(!dir.path().join("out/slides.md").exists());
}

#[test]
fn generates_all_artifacts() {
    let dir = TempDir::new().unwrap();
    write_inputs(&dir);

    Command::cargo_bin("coursegen").unwrap().args(run_args(&dir)).assert().success();

    for name in ["out/slides.md", "out/outline.md", "out/titled.md", "out/topics.md", "out/agenda.md"]
    {
        assert!(dir.path().join(name).exists(), "{} was not written", name);
    }

    let outline = std::fs::read_to_string(dir.path().join("out/outline.md")).unwrap();
    assert!(outline.contains("# Demo Course"));
    assert!(outline.contains("## Module 1: Basics"));
    assert!(outline.contains("- Activity 1-1: Intro"));

    let merged = std::fs::read_to_string(dir.path().join("out/slides.md")).unwrap();
    assert!(merged.contains("Approximately"));
    assert!(merged.contains("  - What You'll Learn in This Module"));
    assert!(merged.contains("    - Understand the platform"));
    assert!(merged.contains("  - key point"));
    assert!(merged.contains("    - Welcome to the course."));
    assert!(merged.contains("      - Say Hello"));

    let agenda = std::fs::read_to_string(dir.path().join("out/agenda.md")).unwrap();
    assert!(agenda.contains("## Agenda"));
    assert!(agenda.contains("- Basics"));
    assert!(agenda.contains("- Advanced"));

    let topics = std::fs::read_to_string(dir.path().join("out/topics.md")).unwrap();
    assert!(topics.contains("## Basics"));
    assert!(topics.contains("- key point"));

    let titled = std::fs::read_to_string(dir.path().join("out/titled.md")).unwrap();
    assert!(titled.contains("## Module 1: Basics"));
    assert!(titled.contains("  - key point"));
}

#[test]
fn guide_without_headings_is_fatal() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("guide.md"), "Just prose, no headings.\n").unwrap();
    std::fs::write(dir.path().join("slides.md"), SLIDE_CONTENT).unwrap();

    Command::cargo_bin("coursegen")
        .unwrap()
        .args(run_args(&dir))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no module headings"));
}

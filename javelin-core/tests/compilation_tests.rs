//! End-to-end bookkeeping tests
//!
//! Drive full compilation runs through the mock javac and check the
//! reconstructed structure: declaration order, main types, first-seen
//! unit order, and the failure paths.

mod common;

use std::io::Write;

use common::{class_bytes, compile_sources, MockJavac};
use javelin_config::CompilerOptions;
use javelin_core::{
    CompileError, JavaCompiler, OutputSink, SourceHandle, StringSource, UnitBuilder,
};

fn simple_names(unit: &javelin_core::CompiledUnit) -> Vec<&str> {
    unit.artifacts().iter().map(|a| a.simple_name()).collect()
}

#[test]
fn test_declaration_order_matches_emission_order() {
    // Scenario: alphabetical emission happens to equal source order
    let run = compile_sources(&[("/src/A.java", "class A {} public class B {}")]).unwrap();

    assert_eq!(run.units().len(), 1);
    let unit = &run.units()[0];
    assert_eq!(simple_names(unit), vec!["A", "B"]);
    assert_eq!(unit.main_artifact().simple_name(), "B");
}

#[test]
fn test_declaration_order_differs_from_emission_order() {
    // Scenario: javac emits Alpha before Zeta; source declares Zeta first
    let run = compile_sources(&[("/src/Zeta.java", "public class Zeta {} class Alpha {}")])
        .unwrap();

    let unit = &run.units()[0];
    assert_eq!(simple_names(unit), vec!["Zeta", "Alpha"]);
    assert_eq!(unit.main_artifact().simple_name(), "Zeta");
}

#[test]
fn test_single_type_without_public_marker() {
    let run = compile_sources(&[("/src/Only.java", "class Only {}")]).unwrap();

    let unit = &run.units()[0];
    assert_eq!(unit.main_artifact().simple_name(), "Only");
}

#[test]
fn test_unit_with_no_declarations_fails_naming_the_unit() {
    // A compiler that emits an artifact for a declaration-less source;
    // the bookkeeping layer must reject the unit by name.
    struct EmitAnyway;

    impl JavaCompiler for EmitAnyway {
        fn compile(
            &self,
            sources: &[Box<dyn SourceHandle>],
            _options: &CompilerOptions,
            sink: &mut dyn OutputSink,
        ) -> Result<(), CompileError> {
            for source in sources {
                sink.create_output("p.Ghost", source.as_ref())?;
            }
            Ok(())
        }
    }

    let handles: Vec<Box<dyn SourceHandle>> = vec![Box::new(StringSource::new(
        "/src/package-info.java",
        "package p;",
    ))];
    let mut builder = UnitBuilder::new();
    let err = EmitAnyway
        .compile(&handles, &CompilerOptions::default(), &mut builder)
        .unwrap_err();

    match err {
        CompileError::NoPrimaryType { unit, .. } => {
            assert_eq!(unit, "/src/package-info.java");
        }
        other => panic!("expected NoPrimaryType, got {:?}", other),
    }
}

#[test]
fn test_two_units_finalize_independently_in_first_seen_order() {
    let run = compile_sources(&[
        ("/src/First.java", "package a;\npublic class First {} class Aux {}"),
        ("/src/Second.java", "package b;\npublic class Second {}"),
    ])
    .unwrap();

    let unit_names: Vec<&str> = run.units().iter().map(|u| u.name()).collect();
    assert_eq!(unit_names, vec!["/src/First.java", "/src/Second.java"]);

    assert_eq!(
        run.units()[0].main_artifact().binary_name(),
        "a.First"
    );
    assert_eq!(
        run.units()[1].main_artifact().binary_name(),
        "b.Second"
    );
}

#[test]
fn test_reordering_is_a_permutation_never_a_filter() {
    let run = compile_sources(&[(
        "/src/Many.java",
        "class Delta {} class Bravo {} public class Echo {} class Alpha {}",
    )])
    .unwrap();

    let unit = &run.units()[0];
    assert_eq!(simple_names(unit), vec!["Delta", "Bravo", "Echo", "Alpha"]);

    // same set as the emission, only the order changed
    let mut sorted = simple_names(unit);
    sorted.sort_unstable();
    let mut registered: Vec<&str> = run.registry().names().collect();
    registered.sort_unstable();
    assert_eq!(sorted, registered);
}

#[test]
fn test_registry_bytes_by_qualified_name() {
    let run = compile_sources(&[(
        "/src/Main.java",
        "package com.example;\npublic class Main {} class Helper {}",
    )])
    .unwrap();

    assert_eq!(
        run.artifact_bytes("com.example.Main").unwrap(),
        class_bytes("com.example.Main")
    );
    assert_eq!(
        run.artifact_bytes("com.example.Helper").unwrap(),
        class_bytes("com.example.Helper")
    );
    assert!(run.artifact_bytes("com.example.Missing").is_none());
}

#[test]
fn test_reads_are_idempotent() {
    let run = compile_sources(&[("/src/A.java", "public class A {} class B {}")]).unwrap();

    let first: Vec<String> = run.units()[0]
        .artifacts()
        .iter()
        .map(|a| a.binary_name().to_string())
        .collect();
    let second: Vec<String> = run.units()[0]
        .artifacts()
        .iter()
        .map(|a| a.binary_name().to_string())
        .collect();
    assert_eq!(first, second);
    assert_eq!(
        run.units()[0].main_artifact().binary_name(),
        run.units()[0].main_artifact().binary_name()
    );
}

#[test]
fn test_duplicate_qualified_name_across_units_fails() {
    // two units claiming the same binary name collide in the registry
    let err = compile_sources(&[
        ("/src/One.java", "package p;\nclass Same {}"),
        ("/src/Two.java", "package p;\nclass Same {}"),
    ])
    .unwrap_err();

    assert!(matches!(
        err,
        CompileError::DuplicateArtifact { binary_name } if binary_name == "p.Same"
    ));
}

#[test]
fn test_emitted_but_undeclared_artifact_fails_finalization() {
    // a compiler that invents an extra class the source never declares
    struct OverEmitting;

    impl JavaCompiler for OverEmitting {
        fn compile(
            &self,
            sources: &[Box<dyn SourceHandle>],
            options: &CompilerOptions,
            sink: &mut dyn OutputSink,
        ) -> Result<(), CompileError> {
            MockJavac.compile(sources, options, sink)?;
            let mut out = sink.create_output("Ghost", sources[0].as_ref())?;
            out.write_all(&class_bytes("Ghost"))
                .map_err(|e| CompileError::CompilerFailure {
                    message: e.to_string(),
                })?;
            Ok(())
        }
    }

    let handles: Vec<Box<dyn SourceHandle>> =
        vec![Box::new(StringSource::new("/src/A.java", "class A {}"))];
    let mut builder = UnitBuilder::new();
    OverEmitting
        .compile(&handles, &CompilerOptions::default(), &mut builder)
        .unwrap();

    let err = builder.finish().unwrap_err();
    match err {
        CompileError::ArtifactMismatch { unit, detail } => {
            assert_eq!(unit, "/src/A.java");
            assert!(detail.contains("Ghost"));
        }
        other => panic!("expected ArtifactMismatch, got {:?}", other),
    }
}

#[test]
fn test_declared_but_unemitted_type_fails_finalization() {
    // a compiler that silently skips one declared type
    struct UnderEmitting;

    impl JavaCompiler for UnderEmitting {
        fn compile(
            &self,
            sources: &[Box<dyn SourceHandle>],
            _options: &CompilerOptions,
            sink: &mut dyn OutputSink,
        ) -> Result<(), CompileError> {
            let mut out = sink.create_output("A", sources[0].as_ref())?;
            out.write_all(&class_bytes("A"))
                .map_err(|e| CompileError::CompilerFailure {
                    message: e.to_string(),
                })?;
            Ok(())
        }
    }

    let handles: Vec<Box<dyn SourceHandle>> = vec![Box::new(StringSource::new(
        "/src/A.java",
        "class A {} class Skipped {}",
    ))];
    let mut builder = UnitBuilder::new();
    UnderEmitting
        .compile(&handles, &CompilerOptions::default(), &mut builder)
        .unwrap();

    let err = builder.finish().unwrap_err();
    match err {
        CompileError::ArtifactMismatch { detail, .. } => {
            assert!(detail.contains("Skipped"));
        }
        other => panic!("expected ArtifactMismatch, got {:?}", other),
    }
}

#[test]
fn test_interleaved_emission_across_units() {
    // callbacks for different units may interleave; grouping must not
    // depend on contiguity
    struct Interleaving;

    impl JavaCompiler for Interleaving {
        fn compile(
            &self,
            sources: &[Box<dyn SourceHandle>],
            _options: &CompilerOptions,
            sink: &mut dyn OutputSink,
        ) -> Result<(), CompileError> {
            sink.create_output("One", sources[0].as_ref())?;
            sink.create_output("Three", sources[1].as_ref())?;
            sink.create_output("Two", sources[0].as_ref())?;
            Ok(())
        }
    }

    let handles: Vec<Box<dyn SourceHandle>> = vec![
        Box::new(StringSource::new("/src/A.java", "class One {} class Two {}")),
        Box::new(StringSource::new("/src/B.java", "class Three {}")),
    ];
    let mut builder = UnitBuilder::new();
    Interleaving
        .compile(&handles, &CompilerOptions::default(), &mut builder)
        .unwrap();

    let run = builder.finish().unwrap();
    assert_eq!(run.units().len(), 2);
    assert_eq!(simple_names(&run.units()[0]), vec!["One", "Two"]);
    assert_eq!(simple_names(&run.units()[1]), vec!["Three"]);
}

#[test]
fn test_finalized_units_are_safely_shared() {
    let run = compile_sources(&[("/src/A.java", "public class A {} class B {}")]).unwrap();
    let run = std::sync::Arc::new(run);

    let mut handles = vec![];
    for _ in 0..4 {
        let run = run.clone();
        handles.push(std::thread::spawn(move || {
            for _ in 0..50 {
                let unit = &run.units()[0];
                assert_eq!(unit.main_artifact().simple_name(), "A");
                assert_eq!(unit.artifacts().len(), 2);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}

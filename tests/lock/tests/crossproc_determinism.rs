//! Cross-process determinism.
//!
//! Spawns the `vector_fixture` binary under several environment variants
//! and asserts identical output. Ciphertexts, key-sheet digests and trace
//! digests must not depend on cwd, locale or unrelated env vars.

use std::path::Path;
use std::process::Command;

use lock_tests::key_sheets::reference_vectors;

/// Resolve the path to the compiled `vector_fixture` binary.
///
/// NOTE: Windows would need `.exe` suffix handling; it is not a current target.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("vector_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

/// Run the binary with the given cwd and environment overrides.
/// Returns stdout as a string.
fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir);
    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "vector_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

// ---------------------------------------------------------------------------
// Cross-process determinism
// ---------------------------------------------------------------------------

#[test]
fn crossproc_determinism_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert!(baseline.contains("trace_digest=sha256:"));
    for vector in reference_vectors() {
        assert!(
            baseline.contains(&format!("{}.matches=true", vector.name)),
            "fixture reports a mismatch for {}:\n{baseline}",
            vector.name
        );
    }

    let variant_cwd = run_variant("/tmp", &[]);
    assert_eq!(baseline, variant_cwd, "output differs when cwd changes from {root} to /tmp");

    let variant_locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    let variant_noise = run_variant(
        &root,
        &[
            ("STECKER_NOISE", "should_not_matter"),
            ("TZ", "America/New_York"),
            ("HOME", "/nonexistent"),
            ("RUST_LOG", "trace"),
        ],
    );
    assert_eq!(
        baseline, variant_noise,
        "output differs with spurious env vars (STECKER_NOISE, TZ, HOME, RUST_LOG)"
    );
}

#[test]
fn fixture_digests_match_in_process_values() {
    let output = run_variant(&workspace_root(), &[]);
    for vector in reference_vectors() {
        let expected = format!("{}.settings={}", vector.name, vector.settings.digest().unwrap());
        assert!(
            output.lines().any(|line| line == expected),
            "missing {expected:?} in fixture output"
        );
    }
}

use anyhow::{Context, Result, bail};
use revpin::{
    AppUpdate, Application, ApplicationSource, Chart, FreightCollection, FreightOrigin,
    FreightReference, GitCommit, SourceUpdate,
};
use std::process::{Command, Output};

pub fn test_origin() -> FreightOrigin {
    FreightOrigin::warehouse("fake-warehouse")
}

/// Eight-source application covering git, HTTPS chart and OCI chart sources.
pub fn multisource_app() -> Application {
    let mut app = Application {
        name: "guestbook".to_string(),
        ..Application::default()
    };
    app.spec.sources = vec![
        // No repoURL at all; nothing can match it.
        ApplicationSource::default(),
        ApplicationSource::new("https://example.com", "fake-chart"),
        ApplicationSource::new("https://example.com", "another-fake-chart"),
        // Schemeless chart repo is an OCI registry.
        ApplicationSource::new("example.com", "fake-chart"),
        ApplicationSource::new("https://example.com", "yet-another-fake-chart"),
        ApplicationSource::new("https://github.com/universe/42", ""),
        ApplicationSource::new("https://github.com/another-universe/42", ""),
        ApplicationSource::new("https://github.com/yet-another-universe/42", ""),
    ];
    app
}

pub fn multisource_freight() -> FreightReference {
    FreightReference {
        origin: test_origin(),
        charts: vec![
            Chart::new("https://example.com", "fake-chart", "v2.0.0"),
            Chart::new("https://example.com", "another-fake-chart", "v1.0.0"),
            Chart::new("oci://example.com/fake-chart", "", "v3.0.0"),
        ],
        commits: vec![
            GitCommit::new("https://github.com/universe/42", "fake-commit"),
            GitCommit::new("https://github.com/another-universe/42", "another-fake-commit"),
        ],
    }
}

pub fn multisource_expected() -> Vec<&'static str> {
    vec![
        "",
        "v2.0.0",
        "v1.0.0",
        "v3.0.0",
        "",
        "fake-commit",
        "another-fake-commit",
        "",
    ]
}

pub fn collection(references: Vec<FreightReference>) -> FreightCollection {
    let mut freight = FreightCollection::new();
    for reference in references {
        freight.update_or_push(reference);
    }
    freight
}

/// App update declaring the first HTTPS chart and the first git repo.
pub fn app_update() -> AppUpdate {
    AppUpdate {
        name: "guestbook".to_string(),
        namespace: None,
        from_origin: Some(test_origin()),
        sources: vec![
            SourceUpdate {
                repo_url: "https://example.com".to_string(),
                chart: "fake-chart".to_string(),
                from_origin: None,
            },
            SourceUpdate {
                repo_url: "https://github.com/universe/42".to_string(),
                chart: String::new(),
                from_origin: None,
            },
        ],
    }
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

//! Built-in sample dataset used when no data file is configured.

use super::application::{Application, Component, ComponentType, Environment, Phase, Workstream};
use super::status::Status;

fn env(name: &str, status: Status) -> Environment {
    Environment::new(name, status)
}

fn component(id: &str, name: &str, kind: ComponentType, tech: &[&str], status: Status) -> Component {
    Component {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        tech_stack: tech.iter().map(|t| t.to_string()).collect(),
        endpoints: Vec::new(),
        source_repo: None,
        pipeline_repo: None,
        build_url: None,
        status,
    }
}

fn app(
    id: &str,
    name: &str,
    workstream: Workstream,
    stage: Status,
    last_updated: &str,
    environments: Vec<Environment>,
) -> Application {
    Application {
        id: id.to_string(),
        name: name.to_string(),
        workstream,
        current_stage: stage,
        environments,
        components: Vec::new(),
        last_updated: last_updated.to_string(),
        next_milestone: None,
        phases: Vec::new(),
    }
}

/// The sample applications, in dashboard order
pub fn applications() -> Vec<Application> {
    use Status::*;

    let mut apps = Vec::new();

    // Business Apps
    let mut portal = app(
        "ba-1",
        "Customer Portal",
        Workstream::BusinessApps,
        Production,
        "2024-08-10",
        vec![
            env("DEV", Completed).completed_on("2024-07-15"),
            env("DEV1", Completed).completed_on("2024-07-18"),
            env("QA", Completed).completed_on("2024-07-25"),
            env("UAT", Completed).completed_on("2024-08-01"),
            env("PROD", InProgress),
        ],
    );
    portal.next_milestone = Some("Complete migration - Aug 20".to_string());
    let mut api = component(
        "cp-api",
        "Customer API",
        ComponentType::WebApi,
        &[".NET Core", "SQL Server", "Redis"],
        Completed,
    );
    api.endpoints = vec!["https://api.customer.example.com".to_string()];
    api.source_repo = Some("https://github.com/example/customer-api".to_string());
    api.pipeline_repo = Some("https://github.com/example/customer-devops".to_string());
    api.build_url = Some("https://jenkins.example.com/customer-api".to_string());
    let mut ui = component(
        "cp-ui",
        "Customer UI",
        ComponentType::Ui,
        &["React", "TypeScript", "Tailwind"],
        InProgress,
    );
    ui.endpoints = vec!["https://customer.example.com".to_string()];
    ui.source_repo = Some("https://github.com/example/customer-ui".to_string());
    ui.pipeline_repo = Some("https://github.com/example/customer-ui-devops".to_string());
    ui.build_url = Some("https://jenkins.example.com/customer-ui".to_string());
    portal.components = vec![api, ui];
    apps.push(portal);

    let mut claims = app(
        "ba-2",
        "Claims Management",
        Workstream::BusinessApps,
        Uat,
        "2024-08-12",
        vec![
            env("DEV", Completed).completed_on("2024-07-20"),
            env("DEV1", Completed).completed_on("2024-07-22"),
            env("QA", Completed).completed_on("2024-08-01"),
            env("UAT", InProgress),
            env("PROD", NotStarted),
        ],
    );
    claims.next_milestone = Some("Production deployment - Aug 25".to_string());
    let mut claims_api = component(
        "cm-api",
        "Claims API",
        ComponentType::WebApi,
        &["Java Spring", "PostgreSQL", "Kafka"],
        InProgress,
    );
    claims_api.source_repo = Some("https://github.com/example/claims-api".to_string());
    claims.components = vec![claims_api];
    claims.phases = vec![
        Phase {
            id: "cm-phase-1".to_string(),
            name: "Phase 1".to_string(),
            description: Some("Core claims intake".to_string()),
            environments: vec![
                env("DEV", Completed),
                env("QA", Completed),
                env("PROD", Completed),
            ],
            components: vec![component(
                "cm-intake",
                "Intake Service",
                ComponentType::Service,
                &["Java Spring", "Kafka"],
                Completed,
            )],
        },
        Phase {
            id: "cm-phase-2".to_string(),
            name: "Phase 2".to_string(),
            description: Some("Adjuster workbench".to_string()),
            environments: vec![
                env("DEV", Completed),
                env("QA", InProgress),
                env("PROD", NotStarted),
            ],
            components: vec![component(
                "cm-workbench",
                "Workbench UI",
                ComponentType::Ui,
                &["Angular", "TypeScript"],
                InProgress,
            )],
        },
    ];
    apps.push(claims);

    apps.push(app(
        "ba-3",
        "Policy Administration",
        Workstream::BusinessApps,
        Testing,
        "2024-08-14",
        vec![
            env("DEV", Completed),
            env("QA", InProgress),
            env("UAT", NotStarted),
            env("PROD", NotStarted),
        ],
    ));

    // Data & Analytics
    let mut warehouse = app(
        "da-1",
        "Data Warehouse",
        Workstream::DataAnalytics,
        Development,
        "2024-08-13",
        vec![env("DEV", InProgress), env("QA", NotStarted), env("PROD", NotStarted)],
    );
    warehouse.components = vec![component(
        "dw-etl",
        "ETL Pipeline",
        ComponentType::Service,
        &["Apache Spark", "Python", "Snowflake"],
        InProgress,
    )];
    apps.push(warehouse);

    apps.push(app(
        "da-2",
        "Analytics Dashboard",
        Workstream::DataAnalytics,
        Planning,
        "2024-08-15",
        vec![env("DEV", NotStarted), env("QA", NotStarted), env("PROD", NotStarted)],
    ));

    // Research & Modelling
    let mut risk = app(
        "rm-1",
        "Risk Modeling Engine",
        Workstream::ResearchModelling,
        Completed,
        "2024-08-05",
        vec![
            env("DEV", Completed).completed_on("2024-07-10"),
            env("QA", Completed).completed_on("2024-07-20"),
            env("PROD", Completed).completed_on("2024-08-05"),
        ],
    );
    risk.components = vec![component(
        "rme-api",
        "Risk API",
        ComponentType::WebApi,
        &["Python", "FastAPI", "MongoDB"],
        Completed,
    )];
    apps.push(risk);

    apps.push(app(
        "rm-2",
        "Pricing Models",
        Workstream::ResearchModelling,
        Uat,
        "2024-08-11",
        vec![
            env("DEV", Completed),
            env("QA", Completed),
            env("UAT", InProgress),
            env("PROD", NotStarted),
        ],
    ));

    for i in 4..=15 {
        let stage = if i % 3 == 0 {
            Completed
        } else if i % 2 == 0 {
            Testing
        } else {
            Development
        };
        let qa = if i % 2 == 0 { InProgress } else { NotStarted };
        apps.push(app(
            &format!("ba-{}", i),
            &format!("Business App {}", i),
            Workstream::BusinessApps,
            stage,
            "2024-08-15",
            vec![env("DEV", Completed), env("QA", qa), env("PROD", NotStarted)],
        ));
    }

    for i in 3..=7 {
        let (stage, dev) = if i % 2 == 0 {
            (Development, InProgress)
        } else {
            (Planning, NotStarted)
        };
        apps.push(app(
            &format!("da-{}", i),
            &format!("Analytics App {}", i),
            Workstream::DataAnalytics,
            stage,
            "2024-08-15",
            vec![env("DEV", dev), env("QA", NotStarted), env("PROD", NotStarted)],
        ));
    }

    apps
}

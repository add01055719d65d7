use roleweave_application::{ExperienceBoardService, ProcessCanvasService, RoleMapperService};
use roleweave_core::analysis::{pain_loss, severity_tier, SeverityTier};
use roleweave_core::experience::CardType;
use roleweave_core::geometry::Point;
use roleweave_core::process::StepType;
use roleweave_core::rolemap::{DurationUnit, Frequency, PainPoint};
use roleweave_infrastructure::{
    JsonExperienceBoardRepository, JsonProcessMapRepository, JsonRoleMapRepository,
};
use std::sync::Arc;
use tempfile::TempDir;

async fn role_mapper(dir: &TempDir) -> RoleMapperService {
    let repo = JsonRoleMapRepository::with_path(dir.path().join("role_map_session.json"));
    RoleMapperService::load(Arc::new(repo)).await
}

#[tokio::test]
async fn test_facilitation_walkthrough() {
    // One collaborator, one shared task, one pain point on that task - the
    // canonical first few minutes of a workshop.
    let dir = TempDir::new().unwrap();
    let mut service = role_mapper(&dir).await;

    service.set_role_name("Customer Support Specialist");
    let pm = service.add_collaborator("Product Manager").unwrap();
    assert!(service.add_task_to_collaborator(&pm, "Sprint planning"));

    assert!(service.record_pain_point(PainPoint {
        task: "Sprint planning".to_string(),
        severity: 4,
        frequency: Frequency::Weekly,
        duration_value: 60.0,
        duration_unit: DurationUnit::Minutes,
        ..PainPoint::default()
    }));

    // Only one owner lists the task, so it is not shared yet.
    let shared = service.shared_tasks();
    assert_eq!(shared["Sprint planning"], vec!["Product Manager"]);
    assert_eq!(shared["Sprint planning"].len(), 1);
    let partition = service.classify_pain_points();
    assert_eq!(partition.isolated.len(), 1);
    assert!(partition.collaborative.is_empty());

    // Loss figures and badge tier.
    let pain = &service.map().pain_points[0];
    let loss = pain_loss(pain);
    assert_eq!(loss.weekly_minutes, 60.0);
    assert_eq!(loss.monthly_minutes, 261.0);
    assert_eq!(severity_tier(pain.severity), SeverityTier::Danger);

    // A second owner of the same task flips it to shared.
    let design = service.add_collaborator("Designer").unwrap();
    service.add_task_to_collaborator(&design, "Sprint planning");
    assert_eq!(service.shared_tasks()["Sprint planning"].len(), 2);
    assert_eq!(service.classify_pain_points().collaborative.len(), 1);
}

#[tokio::test]
async fn test_role_mapper_session_survives_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut service = role_mapper(&dir).await;
        service.set_role_name("Analyst");
        service.set_role_headcount(Some(12));
        let id = service.add_collaborator("Ops").unwrap();
        service.add_tool_to_collaborator(&id, "Slack");
        service.add_solo_task("Daily reconciliations", Frequency::Daily);

        // Drag the collaborator somewhere specific.
        service.begin_drag(&id, Point::new(0.0, 0.0));
        service.drag_to(Point::new(333.0, 222.0));
        service.end_drag();

        service.persist().await.unwrap();
    }

    let service = role_mapper(&dir).await;
    assert_eq!(service.map().role.name, "Analyst");
    assert_eq!(service.map().role.headcount, Some(12));
    assert_eq!(service.map().tools, vec!["Slack".to_string()]);
    assert_eq!(service.map().solo_tasks.len(), 1);
    let id = service.map().collaborators[0].id.clone();
    // The manual placement survives the restart.
    assert!(service.node_positions().get(&id).is_some());
    assert!(service.session_id().is_some());
}

#[tokio::test]
async fn test_process_canvas_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("process_session.json");
    let (a, b);
    {
        let repo = JsonProcessMapRepository::with_path(path.clone());
        let mut service = ProcessCanvasService::load(Arc::new(repo)).await;
        service.set_name("Invoice approval");
        a = service
            .add_step(StepType::Trigger, Point::new(120.0, 90.0))
            .unwrap();
        b = service
            .add_step(StepType::Action, Point::new(360.0, 90.0))
            .unwrap();
        service.click_step(&a);
        service.click_step(&b);
        service.set_step_meta(&b, "owner", "Finance");
        service.set_zoom(1.3);
        service.record_pain_point("Approval delay", Some(&b), 4, "Waits on sign-off");
        service.save().await.unwrap();
    }

    let repo = JsonProcessMapRepository::with_path(path);
    let service = ProcessCanvasService::load(Arc::new(repo)).await;
    let map = service.map();
    assert_eq!(map.info.name, "Invoice approval");
    assert_eq!(map.steps.len(), 2);
    assert!(map.connections.contains(&a, &b));
    assert_eq!(map.step(&b).unwrap().meta["owner"], "Finance");
    assert_eq!(map.zoom, 1.3);
    assert_eq!(map.pain_points.len(), 1);
    assert_eq!(map.connection_curves().len(), 1);
}

#[tokio::test]
async fn test_experience_board_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("experience_session.json");
    {
        let repo = JsonExperienceBoardRepository::with_path(path.clone());
        let mut service = ExperienceBoardService::load(Arc::new(repo)).await;
        service.set_name("Onboarding access journey");
        let a = service.add_card(CardType::Persona, "New joiner", 1).unwrap();
        let b = service.place_node_at(CardType::Friction, Point::new(500.0, 320.0));
        service.click_node(&a);
        service.click_node(&b);
        assert!(service.save().await.unwrap());
    }

    let repo = JsonExperienceBoardRepository::with_path(path);
    let service = ExperienceBoardService::load(Arc::new(repo)).await;
    let board = service.board();
    assert_eq!(board.info.name, "Onboarding access journey");
    assert_eq!(board.cards.len(), 1);
    assert_eq!(board.nodes.len(), 2);
    assert_eq!(board.connections.len(), 1);
    assert_eq!(board.type_quantities()[&CardType::Persona], 1);
}

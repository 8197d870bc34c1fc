use super::*;

#[test]
fn required_modules_are_always_present() {
    let plan = ModulePlan::from_capabilities(&Capabilities::default());
    let names: Vec<&str> = plan.modules().map(RuntimeModule::name).collect();
    assert_eq!(names, vec!["core", "paint", "player"]);
    assert_eq!(plan.easing(), Easing::Linear);
}

#[test]
fn order_is_fixed_regardless_of_flags() {
    let caps = Capabilities {
        path_d: true,
        bezier: true,
        filters: true,
        ..Capabilities::default()
    };
    let plan = ModulePlan::from(&caps);
    let modules: Vec<RuntimeModule> = plan.modules().collect();
    assert_eq!(
        modules,
        vec![
            RuntimeModule::Core,
            RuntimeModule::Bezier,
            RuntimeModule::Paint,
            RuntimeModule::Filter,
            RuntimeModule::PathMorph,
            RuntimeModule::Player,
        ]
    );
    assert_eq!(plan.easing(), Easing::Bezier);
}

#[test]
fn full_plan_has_everything() {
    let plan = ModulePlan::full();
    assert!(RuntimeModule::ALL.iter().all(|m| plan.contains(*m)));
    assert_eq!(
        serde_json::to_string(&plan).unwrap(),
        r#"["core","bezier","transform","paint","gradient","filter","points","path_morph","player"]"#
    );
}

#[test]
fn trigger_and_reference_flags_add_no_modules() {
    let caps = Capabilities {
        mask: true,
        clip_path: true,
        triggers_scroll: true,
        integrity_weights: true,
        ..Capabilities::default()
    };
    assert_eq!(
        ModulePlan::from(&caps),
        ModulePlan::from_capabilities(&Capabilities::default())
    );
}

//! End-to-end pipeline: declare requirements, resolve, mount, inject.

#![expect(clippy::unwrap_used, reason = "tests use unwrap for brevity")]

use luamod_core::{inject_deeply, resolver, Environment, Installer, Module, Security, TreeStyle};

fn chain() -> (Module, Module, Module) {
    let config = Module::from_parts("config.lua", "return { greeting = \"hello\", __id = 1 }");
    let format = Module::from_parts(
        "format.lua",
        "return { exclaim = function(s) return s .. \"!\" end }",
    );
    let app = Module::from_parts(
        "app.lua",
        "return { run = function() return exclaim(greeting) end }",
    );
    format.require(&[config.clone()]).unwrap();
    app.require(&[format.clone()]).unwrap();
    (config, format, app)
}

#[test]
fn resolved_order_is_dependency_first() {
    let (config, format, app) = chain();
    let order = resolver::requirements(std::slice::from_ref(&app));
    assert_eq!(order, vec![config, format, app]);
}

#[test]
fn mount_deeply_returns_one_object_per_module() {
    let env = Environment::new();
    let (_, _, app) = chain();

    let mounted = app.mount_deeply(&env, Security::Checked).unwrap();
    assert_eq!(mounted.len(), 3);
    // config first: its greeting lives in the first mounted object.
    assert_eq!(
        mounted[0].values().get::<String>("greeting").unwrap(),
        "hello"
    );
    assert!(mounted[2].function("run").unwrap().is_some());
}

#[test]
fn installer_accepts_resolved_batch() {
    let env = Environment::new();
    let (_, _, app) = chain();

    let order = resolver::requirements(std::slice::from_ref(&app));
    let mounted = Installer::new(order).mount_all(&env, Security::Unchecked).unwrap();
    assert_eq!(mounted.len(), 3);
}

#[test]
fn inject_deeply_wires_the_whole_chain_through_globals() {
    let env = Environment::new();
    let (_, _, app) = chain();

    inject_deeply(&env, &app, &env.lua().globals(), Security::Checked).unwrap();

    // app.run closes over exclaim and greeting, both injected earlier in
    // dependency order.
    let run: mlua::Function = env.lua().globals().get("run").unwrap();
    assert_eq!(run.call::<String>(()).unwrap(), "hello!");

    // Private symbols never reach the shared namespace.
    assert!(env
        .lua()
        .globals()
        .get::<mlua::Value>("__id")
        .unwrap()
        .is_nil());
}

#[test]
fn relationship_tree_matches_declared_structure() {
    let (_, _, app) = chain();
    let tree = resolver::relationship(std::slice::from_ref(&app), &TreeStyle::default());
    assert_eq!(tree, "app\n....format\n........config\n");
}

use contrabass_records::{
    parse_vm_info, parse_vm_info_with_src, parse_vm_inventory, to_json, Creator, RecordError,
    VmInfo, VmStatus,
};
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn accepts_client_vm_with_two_containers() -> anyhow::Result<()> {
    init_tracing();
    let input = json!({
        "name": "vm1",
        "creator": "client",
        "status": "active",
        "container": [{ "name": "c1" }, { "name": "c2" }]
    });

    let vm = parse_vm_info(&input.to_string())?;
    assert_eq!(vm.creator, Creator::Client);
    assert_eq!(vm.status, VmStatus::Active);
    assert_eq!(vm.container.len(), 2);
    assert_eq!(vm.container_names().collect::<Vec<_>>(), vec!["c1", "c2"]);
    Ok(())
}

#[test]
fn rejects_unknown_creator() {
    init_tracing();
    let input = json!({
        "name": "vm2",
        "creator": "other",
        "status": "active",
        "container": []
    });

    let err = parse_vm_info(&input.to_string()).unwrap_err();
    assert!(matches!(err, RecordError::InvalidRecord(_)));
}

#[test]
fn sourced_record_keeps_every_vm_field() -> anyhow::Result<()> {
    init_tracing();
    let input = json!({
        "name": "vm1",
        "creator": "client",
        "status": "active",
        "container": [{ "name": "c1" }, { "name": "c2" }],
        "src": "/etc/vms/vm1.yaml"
    });

    let sourced = parse_vm_info_with_src(&input.to_string())?;
    let plain = parse_vm_info(&input.to_string())?;
    assert_eq!(sourced.src, "/etc/vms/vm1.yaml");
    assert_eq!(sourced.vm, plain);
    Ok(())
}

#[test]
fn empty_container_list_is_representable() -> anyhow::Result<()> {
    init_tracing();
    let vm = VmInfo::new("idle", Creator::Contrabass, VmStatus::Stopped);
    let decoded = parse_vm_info(&to_json(&vm)?)?;
    assert!(decoded.container.is_empty());
    assert_eq!(decoded, vm);
    Ok(())
}

#[test]
fn records_round_trip_through_json() -> anyhow::Result<()> {
    init_tracing();
    let records = vec![
        VmInfo::new("a", Creator::Contrabass, VmStatus::Active)
            .with_container("web")
            .with_src("origin-a"),
        VmInfo::new("b", Creator::Client, VmStatus::Error).with_src("/etc/vms/b.yaml"),
    ];

    let decoded = parse_vm_inventory(&to_json(&records)?)?;
    assert_eq!(decoded, records);
    Ok(())
}

use customer_etl::utils::validation::Validate;
use customer_etl::{CustomerPipeline, EtlEngine, LocalStorage, RunOutcome, TomlConfig};
use tempfile::TempDir;

#[tokio::test]
async fn test_toml_configured_run() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().to_str().unwrap().to_string();
    std::fs::write(
        temp_dir.path().join("customers.txt"),
        "Amii,Blart,3 1_My Address Street,0123456\nAmii,Frank,3 1_My Address Street,0123456\n",
    )
    .unwrap();

    let toml_content = format!(
        r#"
[pipeline]
name = "toml-run"

[source]
input_path = "customers.txt"

[validation]
phone_pattern = "^[0-9]{{7}}$"

[load]
base_path = "{}"
names_report = "reports/names.txt"
addresses_report = "reports/addresses.txt"
"#,
        base.replace('\\', "\\\\")
    );

    let config = TomlConfig::from_toml_str(&toml_content).unwrap();
    config.validate().unwrap();

    let storage = LocalStorage::new(config.base_path().to_string());
    let pipeline = CustomerPipeline::new(storage, config).unwrap();
    let outcome = EtlEngine::new(pipeline).run().await.unwrap();

    assert!(matches!(outcome, RunOutcome::Completed(ref s) if s.all_written()));
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("reports/names.txt")).unwrap(),
        "Blart : 1\nFrank : 1\nAmii : 2\n"
    );
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("reports/addresses.txt")).unwrap(),
        "3 1_My Address Street\n3 1_My Address Street\n"
    );
}

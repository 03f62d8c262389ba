use anyhow::Result;
use tempfile::TempDir;
use voucher_service::{
    ApplyOutcome, ErrorKind, InMemoryVoucherRepository, JsonFileVoucherRepository,
    VoucherRepository, VoucherService,
};

#[tokio::test]
async fn test_create_then_apply_in_memory() -> Result<()> {
    let repo = InMemoryVoucherRepository::new();
    let service = VoucherService::new(repo.clone());

    service.create_voucher("WELCOME10", 10).await?;

    let below = service.apply_voucher("WELCOME10", 99.0).await?;
    assert_eq!(below, ApplyOutcome::not_applied(99.0, 10));
    assert!(!service.get_voucher("WELCOME10").await?.used);

    let applied = service.apply_voucher("WELCOME10", 200.0).await?;
    assert_eq!(applied.final_amount, 180.0);
    assert!(applied.applied);

    let stored = repo.get_voucher_by_code("WELCOME10").await?.unwrap();
    assert!(stored.used);
    assert_eq!(stored.id, 1);

    // A used voucher keeps its discount visible but grants nothing.
    let again = service.apply_voucher("WELCOME10", 200.0).await?;
    assert_eq!(again, ApplyOutcome::not_applied(200.0, 10));
    Ok(())
}

#[tokio::test]
async fn test_conflicts_surface_to_caller() -> Result<()> {
    let service = VoucherService::new(InMemoryVoucherRepository::new());
    service.create_voucher("DUP", 5).await?;

    let err = service.create_voucher("DUP", 50).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(
        serde_json::to_value(err.to_body())?,
        serde_json::json!({"message": "Voucher already exist.", "type": "conflict"})
    );

    let err = service.apply_voucher("NOPE", 300.0).await.unwrap_err();
    assert_eq!(
        serde_json::to_value(err.to_body())?,
        serde_json::json!({"message": "Voucher does not exist.", "type": "conflict"})
    );

    assert_eq!(service.get_voucher("DUP").await?.discount, 5);
    Ok(())
}

#[tokio::test]
async fn test_json_store_survives_reopen() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("vouchers.json");

    {
        let service = VoucherService::new(JsonFileVoucherRepository::new(&path));
        service.create_voucher("PERSIST", 30).await?;
        service.create_voucher("OTHER", 0).await?;
        let outcome = service.apply_voucher("PERSIST", 150.0).await?;
        assert_eq!(outcome.final_amount, 105.0);
    }

    let reopened = JsonFileVoucherRepository::new(&path);
    let persisted = reopened.get_voucher_by_code("PERSIST").await?.unwrap();
    assert!(persisted.used);
    assert_eq!(persisted.discount, 30);

    let other = reopened.get_voucher_by_code("OTHER").await?.unwrap();
    assert_eq!(other.id, 2);
    assert!(!other.used);

    let service = VoucherService::new(reopened);
    let err = service.create_voucher("PERSIST", 30).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    Ok(())
}

#[tokio::test]
async fn test_configured_minimum_from_toml() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = temp_dir.path().join("store.json");
    let config_path = temp_dir.path().join("voucher.toml");
    std::fs::write(
        &config_path,
        format!(
            "[service]\nmin_amount = 20.0\n\n[storage]\npath = \"{}\"\n",
            store.display()
        ),
    )?;

    let config = voucher_service::ServiceConfig::from_file(&config_path)?;
    let service = VoucherService::with_min_amount(
        JsonFileVoucherRepository::new(&config.storage.path),
        config.service.min_amount,
    );
    service.create_voucher("SMALL", 50).await?;

    let outcome = service.apply_voucher("SMALL", 20.0).await?;
    assert!(outcome.applied);
    assert_eq!(outcome.final_amount, 10.0);
    assert!(store.exists());
    Ok(())
}

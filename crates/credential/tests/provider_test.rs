use std::sync::Arc;

use pretty_assertions::assert_eq;
use starhunter_credential::{
    CredentialData, CredentialError, CredentialProvider, StaticCredentialProvider,
};

#[tokio::test]
async fn static_provider_returns_registered_record() {
    let provider = StaticCredentialProvider::new().with(
        "starhunterApi",
        CredentialData::new()
            .with_field("baseUrl", "https://acme.starhunter.software")
            .with_secret("accessToken", "tok"),
    );
    let provider: Arc<dyn CredentialProvider> = Arc::new(provider);

    let data = provider.get("starhunterApi").await.unwrap();
    assert_eq!(data.field("baseUrl"), Some("https://acme.starhunter.software"));
    assert_eq!(
        data.require_secret("accessToken")
            .unwrap()
            .expose_secret(str::to_owned),
        "tok"
    );
}

#[tokio::test]
async fn static_provider_reports_unknown_key() {
    let provider = StaticCredentialProvider::new();
    let err = provider.get("starhunterBirthdaysApi").await.unwrap_err();
    assert_eq!(
        err,
        CredentialError::NotFound {
            key: "starhunterBirthdaysApi".into()
        }
    );
}

#[test]
fn debug_lists_keys_only() {
    let provider = StaticCredentialProvider::new()
        .with("b", CredentialData::new().with_secret("accessToken", "secret"))
        .with("a", CredentialData::new());
    let debug = format!("{provider:?}");
    assert_eq!(debug, r#"StaticCredentialProvider { keys: ["a", "b"] }"#);
    assert_eq!(provider.len(), 2);
}

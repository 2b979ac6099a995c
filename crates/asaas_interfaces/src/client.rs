//! Entry point bundling the services over one authenticated transport.

use std::{sync::Arc, time::Duration};

use common_utils::errors::CustomResult;
use masking::{ApiKey, PeekInterface, Secret};
use router_env::logger;
use serde_json::Value;

use crate::{
    api::{ConnectorTransport, Request},
    configs::ClientSettings,
    consts,
    errors::{ConfigurationError, TransportError},
    services::{CreditCardService, CustomerService, PaymentService, WebhookService},
};

/// Resolves relative requests against the base URL and authenticates them before delegating to
/// the caller's transport.
#[derive(Debug)]
struct AuthenticatedTransport {
    base_url: String,
    api_key: Secret<String, ApiKey>,
    timeout: Duration,
    inner: Arc<dyn ConnectorTransport>,
}

#[async_trait::async_trait]
impl ConnectorTransport for AuthenticatedTransport {
    async fn send(&self, mut request: Request) -> CustomResult<Value, TransportError> {
        request.url = format!("{}/{}", self.base_url, request.url.trim_start_matches('/'));
        request.add_header(
            consts::ACCESS_TOKEN_HEADER,
            Secret::new(self.api_key.peek().clone()),
        );
        request.timeout.get_or_insert(self.timeout);

        self.inner.send(request).await
    }
}

/// Asaas API client.
///
/// ```ignore
/// let settings = ClientSettings::load()?;
/// let client = AsaasClient::new(settings, Arc::new(MyHttpTransport::default()))?;
/// let customer = client.customers().get("cus_000005219613").await?;
/// ```
#[derive(Debug, Clone)]
pub struct AsaasClient {
    customers: CustomerService,
    payments: PaymentService,
    credit_cards: CreditCardService,
    webhooks: WebhookService,
}

impl AsaasClient {
    /// Fails when the settings carry no API key or an unusable base URL.
    pub fn new(
        settings: ClientSettings,
        transport: Arc<dyn ConnectorTransport>,
    ) -> CustomResult<Self, ConfigurationError> {
        settings.validate()?;
        let base_url = settings.resolved_base_url()?;

        logger::debug!(
            environment = %settings.environment,
            base_url = %base_url,
            "asaas client configured"
        );

        let transport: Arc<dyn ConnectorTransport> = Arc::new(AuthenticatedTransport {
            base_url,
            timeout: settings.timeout(),
            api_key: settings.api_key,
            inner: transport,
        });

        Ok(Self {
            customers: CustomerService::new(Arc::clone(&transport)),
            payments: PaymentService::new(Arc::clone(&transport)),
            credit_cards: CreditCardService::new(Arc::clone(&transport)),
            webhooks: WebhookService::new(transport),
        })
    }

    pub fn customers(&self) -> &CustomerService {
        &self.customers
    }

    pub fn payments(&self) -> &PaymentService {
        &self.payments
    }

    pub fn credit_cards(&self) -> &CreditCardService {
        &self.credit_cards
    }

    pub fn webhooks(&self) -> &WebhookService {
        &self.webhooks
    }
}

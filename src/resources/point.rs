//! Point terminals and their payment intents.

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use crate::http_client::HttpClient;
use crate::models::{
    CancelPaymentIntent, DevicesResponse, OperatingModeRequest, OperatingModeResponse,
    PaymentIntent, PaymentIntentRequest,
};
use crate::transport::{RequestData, Transport};

const URL_DEVICES: &str = "/point/integration-api/devices";
const URL_DEVICE: &str = "/point/integration-api/devices/{device_id}";
const URL_PAYMENT_INTENT: &str = "/point/integration-api/devices/{device_id}/payment-intents";
const URL_PAYMENT_INTENT_GET: &str =
    "/point/integration-api/payment-intents/{payment_intent_id}";
const URL_PAYMENT_INTENT_CANCEL: &str =
    "/point/integration-api/devices/{device_id}/payment-intents/{payment_intent_id}";

/// Operations on Point devices.
pub trait PointApi: Send + Sync {
    /// Queue a payment intent on a device.
    fn create(
        &self,
        device_id: &str,
        request: &PaymentIntentRequest,
    ) -> impl Future<Output = Result<PaymentIntent>> + Send;

    /// Fetch a payment intent.
    fn get(&self, payment_intent_id: &str) -> impl Future<Output = Result<PaymentIntent>> + Send;

    /// Cancel a queued payment intent.
    fn cancel(
        &self,
        device_id: &str,
        payment_intent_id: &str,
    ) -> impl Future<Output = Result<CancelPaymentIntent>> + Send;

    /// Devices bound to the account.
    fn list_devices(&self) -> impl Future<Output = Result<DevicesResponse>> + Send;

    /// Switch a device between `PDV` and `STANDALONE`.
    fn update_operating_mode(
        &self,
        device_id: &str,
        operating_mode: &str,
    ) -> impl Future<Output = Result<OperatingModeResponse>> + Send;
}

/// [`PointApi`] over a shared [`Transport`].
pub struct PointClient<C> {
    transport: Arc<Transport<C>>,
}

impl<C: HttpClient> PointClient<C> {
    /// Build a client over `transport`.
    pub fn new(transport: Arc<Transport<C>>) -> Self {
        Self { transport }
    }
}

impl<C> Clone for PointClient<C> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<C: HttpClient> PointApi for PointClient<C> {
    async fn create(
        &self,
        device_id: &str,
        request: &PaymentIntentRequest,
    ) -> Result<PaymentIntent> {
        let data = RequestData::post(URL_PAYMENT_INTENT)
            .path_param("device_id", device_id)
            .json(request)?;
        self.transport.execute(data).await
    }

    async fn get(&self, payment_intent_id: &str) -> Result<PaymentIntent> {
        let data = RequestData::get(URL_PAYMENT_INTENT_GET)
            .path_param("payment_intent_id", payment_intent_id);
        self.transport.execute(data).await
    }

    async fn cancel(
        &self,
        device_id: &str,
        payment_intent_id: &str,
    ) -> Result<CancelPaymentIntent> {
        let data = RequestData::delete(URL_PAYMENT_INTENT_CANCEL)
            .path_param("device_id", device_id)
            .path_param("payment_intent_id", payment_intent_id);
        self.transport.execute(data).await
    }

    async fn list_devices(&self) -> Result<DevicesResponse> {
        self.transport.execute(RequestData::get(URL_DEVICES)).await
    }

    async fn update_operating_mode(
        &self,
        device_id: &str,
        operating_mode: &str,
    ) -> Result<OperatingModeResponse> {
        let body = OperatingModeRequest {
            operating_mode: operating_mode.to_owned(),
        };
        let data = RequestData::patch(URL_DEVICE)
            .path_param("device_id", device_id)
            .json(&body)?;
        self.transport.execute(data).await
    }
}

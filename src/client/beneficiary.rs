//! Beneficiary client.

use uuid::Uuid;

use super::ClientError;
use crate::gateway::{Auth, Gateway};
use crate::objects::MessageResponse;
use crate::objects::beneficiary::{
    BeneficiariesResponse, Beneficiary, BeneficiaryResponse, CreateBeneficiaryRequest,
    UpdateBeneficiaryRequest,
};

/// Typed client for the saved-recipient endpoints.
#[derive(Debug, Clone)]
pub struct BeneficiaryClient {
    gateway: Gateway,
}

impl BeneficiaryClient {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// `GET /beneficiaries` – all of the caller's saved recipients.
    pub async fn list(&self) -> Result<Vec<Beneficiary>, ClientError> {
        let response: BeneficiariesResponse =
            self.gateway.get("/beneficiaries", Auth::Bearer).await?;
        Ok(response.beneficiaries)
    }

    /// `POST /beneficiaries` – save a new recipient.
    pub async fn create(
        &self,
        request: &CreateBeneficiaryRequest,
    ) -> Result<Beneficiary, ClientError> {
        let response: BeneficiaryResponse = self
            .gateway
            .post("/beneficiaries", request, Auth::Bearer)
            .await?;
        Ok(response.beneficiary)
    }

    /// `GET /beneficiaries/{id}` – one saved recipient.
    pub async fn get(&self, id: Uuid) -> Result<Beneficiary, ClientError> {
        let path = format!("/beneficiaries/{id}");
        let response: BeneficiaryResponse = self.gateway.get(&path, Auth::Bearer).await?;
        Ok(response.beneficiary)
    }

    /// `PUT /beneficiaries/{id}` – edit a saved recipient.
    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateBeneficiaryRequest,
    ) -> Result<Beneficiary, ClientError> {
        let path = format!("/beneficiaries/{id}");
        let response: BeneficiaryResponse =
            self.gateway.put(&path, request, Auth::Bearer).await?;
        Ok(response.beneficiary)
    }

    /// `DELETE /beneficiaries/{id}` – remove a saved recipient.
    pub async fn delete(&self, id: Uuid) -> Result<MessageResponse, ClientError> {
        let path = format!("/beneficiaries/{id}");
        self.gateway.delete(&path, Auth::Bearer).await
    }
}

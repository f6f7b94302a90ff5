use async_trait::async_trait;

use crate::modules::contact::application::domain::ContactSubmission;
use crate::modules::contact::application::ports::outgoing::ContactStore;
use crate::shared::backend::{RestClient, StoreError};

const TABLE: &str = "contacts";

#[derive(Clone)]
pub struct ContactStoreRemote {
    client: RestClient,
}

impl ContactStoreRemote {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContactStore for ContactStoreRemote {
    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), StoreError> {
        self.client
            .insert_minimal(TABLE, std::slice::from_ref(submission))
            .await
    }
}

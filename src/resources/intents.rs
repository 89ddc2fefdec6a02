use crate::client::WitClient;
use crate::errors::WitResult;
use crate::types::Intent;
use crate::utils::decode;

impl WitClient {
    /// Lists the intents configured on the app, in the order the service returns them.
    pub fn intents(&self) -> WitResult<Vec<Intent>> {
        let result = self.get("/intents")?;
        decode(&result)
    }
}

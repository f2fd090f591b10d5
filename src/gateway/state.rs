use crate::config::Config;
use crate::gateway::auth::ApiKey;
use crate::judge::JudgeBackend;

#[derive(Clone)]
pub struct HandlerState<J: JudgeBackend + Clone + Send + Sync + 'static> {
    pub judge: J,

    pub api_key: ApiKey,
}

impl<J> HandlerState<J>
where
    J: JudgeBackend + Clone + Send + Sync + 'static,
{
    pub fn new(judge: J, api_key: &str) -> Self {
        Self {
            judge,
            api_key: ApiKey::new(api_key),
        }
    }

    pub fn from_config(judge: J, config: &Config) -> Self {
        Self::new(judge, &config.api_key)
    }
}

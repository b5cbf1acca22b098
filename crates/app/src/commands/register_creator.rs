use std::sync::Arc;

use async_trait::async_trait;

use catalog_core::CreatorId;
use catalog_creators::{Creator, Email};

use crate::error::AppResult;
use crate::handler::CommandHandler;
use crate::ports::CreatorRepository;

/// Command: RegisterCreator.
#[derive(Debug, Clone)]
pub struct RegisterCreator {
    pub creator_id: CreatorId,
    pub name: String,
    pub email: String,
}

pub struct RegisterCreatorHandler {
    creators: Arc<dyn CreatorRepository>,
}

impl RegisterCreatorHandler {
    pub fn new(creators: Arc<dyn CreatorRepository>) -> Self {
        Self { creators }
    }
}

#[async_trait]
impl CommandHandler for RegisterCreatorHandler {
    type Command = RegisterCreator;
    type Output = ();

    async fn handle(&self, command: RegisterCreator) -> AppResult<()> {
        let email = Email::new(command.email)?;
        let creator = Creator::register(command.creator_id, command.name, email)?;
        self.creators.add(creator).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Mutex, RwLock};

    use catalog_events::EventSourcingEntity;

    use super::*;
    use crate::error::AppError;
    use crate::ports::Tracked;

    #[derive(Default)]
    struct StubCreators {
        store: Mutex<HashMap<CreatorId, Tracked<Creator>>>,
    }

    #[async_trait]
    impl CreatorRepository for StubCreators {
        async fn add(&self, creator: Creator) -> AppResult<Tracked<Creator>> {
            let id = *catalog_core::Entity::id(&creator);
            let tracked = Arc::new(RwLock::new(creator));
            self.store.lock().unwrap().insert(id, tracked.clone());
            Ok(tracked)
        }

        async fn of_id(&self, id: CreatorId) -> AppResult<Tracked<Creator>> {
            self.store
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or(AppError::NotFound)
        }
    }

    #[tokio::test]
    async fn registers_and_buffers_the_registered_event() {
        let creators = Arc::new(StubCreators::default());
        let handler = RegisterCreatorHandler::new(creators.clone());
        let id = CreatorId::new();

        handler
            .handle(RegisterCreator {
                creator_id: id,
                name: "Ada".into(),
                email: "ada@example.com".into(),
            })
            .await
            .unwrap();

        let creator = creators.of_id(id).await.unwrap();
        assert!(creator.read().unwrap().has_pending_events());
    }

    #[tokio::test]
    async fn rejects_a_malformed_email() {
        let handler = RegisterCreatorHandler::new(Arc::new(StubCreators::default()));
        let err = handler
            .handle(RegisterCreator {
                creator_id: CreatorId::new(),
                name: "Ada".into(),
                email: "nope".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}

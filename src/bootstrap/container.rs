use resource_events::{AppEvent, EventBus};
use resource_config::Config;
use resource_container::Container;
use std::sync::Arc;

pub fn build(config: &Config, events: &Arc<EventBus>) -> Arc<Container> {
    for context in &config.contexts {
        if context.enabled {
            events.emit(AppEvent::ContextDeployed {
                path: context.path.clone(),
                name: context.name.clone(),
            });
        } else {
            events.emit(AppEvent::ContextDisabled {
                path: context.path.clone(),
            });
        }
    }

    let container = Container::from_config(config);

    let (path, source) = container.resource_context();
    events.emit(AppEvent::ResourceContextSelected {
        path,
        source: source.to_string(),
    });

    Arc::new(container)
}

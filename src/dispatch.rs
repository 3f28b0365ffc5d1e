use crate::event::MailEvent;

/// Event side channel for send outcomes.
///
/// Injected into the service at construction time; a service without a
/// publisher only logs failures.
pub trait Publish {
    fn publish(&self, event: MailEvent);
}

type Listener = Box<dyn Fn(&MailEvent) + Send + Sync>;

/// Synchronous fan-out to zero or more registered listeners.
///
/// Listeners run on the publishing thread, in registration order. What a
/// listener does with the event (or whether it panics) is its own concern.
#[derive(Default)]
pub struct Dispatcher {
    listeners: Vec<Listener>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn listen(&mut self, listener: impl Fn(&MailEvent) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

impl Publish for Dispatcher {
    fn publish(&self, event: MailEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::MessageNotSent;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn every_listener_sees_the_event() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut dispatcher = Dispatcher::new();

        for _ in 0..3 {
            let count = count.clone();
            dispatcher.listen(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }

        dispatcher.publish(MailEvent::NotSent(MessageNotSent::with_error("nope")));
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn publish_with_no_listeners_is_a_no_op() {
        Dispatcher::new().publish(MailEvent::NotSent(MessageNotSent::with_error("nope")));
    }
}

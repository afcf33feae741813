//! Typed game lifecycle events.

use std::fmt;

/// A game lifecycle signal published by the [`Round`](crate::Round).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new round has begun; the preview phase is starting.
    GameStart,
    /// The preview is over and the pieces have been scrambled.
    Shuffle,
    /// The level countdown ran out before the puzzle was solved.
    GameEnd,
    /// The puzzle was solved; the level clock has been paused.
    Resolved,
    /// An even click selected the piece occupying this slot.
    Select(usize),
    /// An odd click swapped the selected slot with this one.
    Swap(usize),
}

/// Handle identifying one subscriber, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// A single typed dispatcher for [`GameEvent`]s.
///
/// The bus is owned by the composition root (the round); components that
/// need to react to lifecycle signals subscribe a callback and hold on to
/// the returned [`Subscription`] so they can unsubscribe on teardown.
///
/// # Examples
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use tessella_session::{EventBus, GameEvent};
///
/// let mut bus = EventBus::new();
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let recorder = Rc::clone(&seen);
/// let sub = bus.subscribe(move |event| recorder.borrow_mut().push(*event));
///
/// bus.emit(GameEvent::Select(4));
/// assert_eq!(*seen.borrow(), [GameEvent::Select(4)]);
///
/// assert!(bus.unsubscribe(sub));
/// bus.emit(GameEvent::Swap(5));
/// assert_eq!(seen.borrow().len(), 1);
/// ```
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<(Subscription, Box<dyn FnMut(&GameEvent)>)>,
    next_id: u64,
}

impl EventBus {
    /// Creates a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Registers a callback for every subsequent event.
    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&GameEvent) + 'static,
    {
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber; returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(id, _)| *id != subscription);
        self.subscribers.len() != before
    }

    /// Delivers an event to every subscriber in subscription order.
    pub fn emit(&mut self, event: GameEvent) {
        log::trace!("event: {event:?}");
        for (_, callback) in &mut self.subscribers {
            callback(&event);
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn test_delivery_order_and_unsubscribe() {
        let mut bus = EventBus::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = {
            let log = Rc::clone(&log);
            bus.subscribe(move |event| log.borrow_mut().push(("first", *event)))
        };
        let _second = {
            let log = Rc::clone(&log);
            bus.subscribe(move |event| log.borrow_mut().push(("second", *event)))
        };

        bus.emit(GameEvent::GameStart);
        assert_eq!(
            *log.borrow(),
            [
                ("first", GameEvent::GameStart),
                ("second", GameEvent::GameStart),
            ]
        );

        assert!(bus.unsubscribe(first));
        assert!(!bus.unsubscribe(first));
        assert_eq!(bus.subscriber_count(), 1);

        bus.emit(GameEvent::Resolved);
        assert_eq!(log.borrow().last(), Some(&("second", GameEvent::Resolved)));
    }
}

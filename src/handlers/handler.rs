use std::fmt;
use std::io::Write;

use tracing::trace;

use crate::core::outcome::Outcome;
use crate::core::request::Request;
use crate::handlers::handler_kind::HandlerKind;

/// A single link in a handler chain
///
/// Holds its variant tag and an owned link to its successor. Every variant
/// shares the same match-or-forward logic in [`handle`](Self::handle); the tag
/// only supplies the label, name, and entry marker.
///
/// Traversal, cloning, comparison and drop all walk the links in a loop, so
/// chain length is bounded by memory rather than stack depth.
pub struct Handler {
    kind: HandlerKind,
    next: Option<Box<Handler>>,
}

/// Result of visiting one link
enum Step<'a> {
    Processed,
    Forward(&'a Handler),
    End,
}

impl Handler {
    /// Create an unlinked handler (end of chain)
    pub fn new(kind: HandlerKind) -> Self {
        Self { kind, next: None }
    }

    pub fn kind(&self) -> HandlerKind {
        self.kind
    }

    /// The successor, if this handler is not the tail
    pub fn next(&self) -> Option<&Handler> {
        self.next.as_deref()
    }

    /// Store `next` as the successor, replacing any previous one
    ///
    /// Passing `None` marks this handler as the end of the chain.
    pub fn set_next(&mut self, next: Option<Handler>) -> &mut Self {
        self.next = next.map(Box::new);
        self
    }

    /// Fluent form of [`set_next`](Self::set_next) used while building
    pub fn with_next(mut self, next: Handler) -> Self {
        self.set_next(Some(next));
        self
    }

    /// Kinds from this handler to the tail
    pub fn kinds(&self) -> impl Iterator<Item = HandlerKind> + '_ {
        std::iter::successors(Some(self), |handler| handler.next()).map(Handler::kind)
    }

    /// Process `request` here or forward it unchanged
    ///
    /// The entry marker is written before the label is checked. On a match the
    /// processed message is written and the traversal stops.
    pub fn handle<W: Write + ?Sized>(
        &self,
        request: &Request,
        out: &mut W,
    ) -> std::io::Result<Outcome> {
        let mut current = self;
        loop {
            match current.visit(request, out)? {
                Step::Processed => return Ok(Outcome::Handled(current.kind)),
                Step::Forward(next) => current = next,
                Step::End => return Ok(Outcome::Unhandled),
            }
        }
    }

    /// Default forwarding: hand the request to the successor, or drop it
    pub fn forward<W: Write + ?Sized>(
        &self,
        request: &Request,
        out: &mut W,
    ) -> std::io::Result<Outcome> {
        match self.next() {
            Some(next) => next.handle(request, out),
            None => Ok(Outcome::Unhandled),
        }
    }

    fn visit<W: Write + ?Sized>(&self, request: &Request, out: &mut W) -> std::io::Result<Step<'_>> {
        if let Some(marker) = self.kind.marker() {
            writeln!(out, "{}", marker)?;
        }

        if self.kind.matches(request.label()) {
            trace!(handler = %self.kind, request = %request, "request processed");
            writeln!(out, "{} processed the request.", self.kind.name())?;
            return Ok(Step::Processed);
        }

        Ok(match self.next() {
            Some(next) => {
                trace!(from = %self.kind, to = %next.kind, request = %request, "forwarding request");
                Step::Forward(next)
            }
            None => Step::End,
        })
    }
}

impl Clone for Handler {
    fn clone(&self) -> Self {
        let kinds: Vec<HandlerKind> = self.kinds().collect();
        let mut tail: Option<Handler> = None;
        for kind in kinds.into_iter().rev() {
            let mut handler = Handler::new(kind);
            handler.set_next(tail);
            tail = Some(handler);
        }
        // kinds() always yields at least self
        tail.unwrap_or_else(|| Handler::new(self.kind))
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        self.kinds().eq(other.kinds())
    }
}

impl Eq for Handler {}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("kind", &self.kind)
            .field("successors", &self.kinds().skip(1).collect::<Vec<_>>())
            .finish()
    }
}

impl Drop for Handler {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut handler) = next {
            next = handler.next.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(handler: &Handler, label: &str) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = handler.handle(&Request::from(label), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn lone_handler_processes_its_own_label() {
        let (outcome, text) = run(&Handler::new(HandlerKind::A), "A");
        assert_eq!(outcome, Outcome::Handled(HandlerKind::A));
        assert_eq!(text, "-----\nHandler A processed the request.\n");
    }

    #[test]
    fn linked_handlers_forward_in_order() {
        let head = Handler::new(HandlerKind::A)
            .with_next(Handler::new(HandlerKind::B).with_next(Handler::new(HandlerKind::C)));
        let (outcome, text) = run(&head, "C");
        assert_eq!(outcome, Outcome::Handled(HandlerKind::C));
        assert_eq!(text, "-----\n======\nHandler C processed the request.\n");
    }

    #[test]
    fn tail_without_match_drops_silently() {
        let (outcome, text) = run(&Handler::new(HandlerKind::C), "A");
        assert_eq!(outcome, Outcome::Unhandled);
        assert!(text.is_empty());
    }

    #[test]
    fn forward_without_successor_writes_nothing() {
        let mut out = Vec::new();
        let outcome = Handler::new(HandlerKind::B)
            .forward(&Request::from("B"), &mut out)
            .unwrap();
        assert_eq!(outcome, Outcome::Unhandled);
        assert!(out.is_empty());
    }

    #[test]
    fn set_next_replaces_previous_successor() {
        let mut head = Handler::new(HandlerKind::A);
        head.set_next(Some(Handler::new(HandlerKind::B)));
        head.set_next(Some(Handler::new(HandlerKind::C)));
        assert_eq!(head.next().map(Handler::kind), Some(HandlerKind::C));

        let (outcome, _) = run(&head, "B");
        assert_eq!(outcome, Outcome::Unhandled);

        head.set_next(None);
        assert!(head.next().is_none());
    }

    #[test]
    fn clone_and_eq_follow_the_whole_chain() {
        let head = Handler::new(HandlerKind::A).with_next(Handler::new(HandlerKind::B));
        let copy = head.clone();
        assert_eq!(copy, head);
        assert_eq!(copy.kinds().collect::<Vec<_>>(), vec![HandlerKind::A, HandlerKind::B]);
        assert_ne!(copy, Handler::new(HandlerKind::A));
    }

    #[test]
    fn forward_skips_own_label() {
        let head = Handler::new(HandlerKind::A).with_next(Handler::new(HandlerKind::B));
        let mut out = Vec::new();
        let outcome = head.forward(&Request::from("A"), &mut out).unwrap();
        assert_eq!(outcome, Outcome::Unhandled);
        assert_eq!(String::from_utf8(out).unwrap(), "======\n");
    }

    #[test]
    fn long_chain_dispatches_and_drops() {
        let mut head = Handler::new(HandlerKind::C);
        for _ in 0..200_000 {
            head = Handler::new(HandlerKind::B).with_next(head);
        }

        let outcome = head.handle(&Request::from("Z"), &mut std::io::sink()).unwrap();
        assert_eq!(outcome, Outcome::Unhandled);
        assert_eq!(head.kinds().count(), 200_001);
        drop(head);
    }
}

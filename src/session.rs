//! Line-oriented overlay session
//!
//! Reads commands from an input stream, applies them to a product store and
//! writes replies plus overlay change events to an output stream.

mod command;

pub use command::Command;

use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, PoisonError};

use crate::catalog::Catalog;
use crate::config::OverlayConfig;
use crate::error::StoreError;
use crate::overlay::{ProductStore, render_overlay};
use crate::store::Subscription;

const HELP_TEXT: &str = "\
commands:
  list        list catalog products
  categories  list catalog categories
  open <id>   show a product in the overlay
  close       hide the overlay
  show        print the overlay
  help        print this help
  quit        exit";

/// Overlay change lines queued by the store subscriber
type EventQueue = Arc<Mutex<Vec<String>>>;

/// Interactive overlay session over one catalog
pub struct Session {
    catalog: Catalog,
    store: ProductStore,
    overlay: OverlayConfig,
    events: EventQueue,
    _subscription: Subscription,
}

impl Session {
    /// Create a session that announces every overlay change made through `store`
    pub fn new(catalog: Catalog, store: ProductStore, overlay: OverlayConfig) -> Self {
        let events: EventQueue = Arc::default();
        let sink = Arc::clone(&events);
        let subscription = store.subscribe(move |product| {
            let event = match product {
                Some(product) => format!("opened: {}", product.title),
                None => "closed".to_string(),
            };
            sink.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event);
        });

        Self {
            catalog,
            store,
            overlay,
            events,
            _subscription: subscription,
        }
    }

    /// Process commands until `quit` or end of input
    pub fn run<R, W>(&self, mut input: R, mut output: W) -> Result<(), StoreError>
    where
        R: BufRead,
        W: Write,
    {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            // Changes made elsewhere are announced before the command that may display them
            self.flush_events(&mut output)?;

            let parsed = match std::str::from_utf8(&buf) {
                Ok(line) => Command::parse(line.trim_end_matches(['\n', '\r'])),
                Err(_) => Err("input line is not valid UTF-8".to_string()),
            };

            let flow = match parsed {
                Ok(Some(command)) => self.execute(command, &mut output)?,
                Ok(None) => ControlFlow::Continue(()),
                Err(message) => {
                    writeln!(output, "error: {}", message)?;
                    ControlFlow::Continue(())
                }
            };

            self.flush_events(&mut output)?;
            output.flush()?;

            if flow.is_break() {
                break;
            }
        }

        Ok(())
    }

    /// Apply one command, writing its reply to `output`
    pub fn execute<W: Write>(
        &self,
        command: Command,
        output: &mut W,
    ) -> Result<ControlFlow<()>, StoreError> {
        #[cfg(debug_assertions)]
        log::debug!("Executing {:?}", command);

        match command {
            Command::List => {
                for product in self.catalog.products() {
                    writeln!(output, "{}\t{}", product.id, product.title)?;
                }
            }
            Command::Categories => {
                for category in self.catalog.categories() {
                    writeln!(output, "{}", category)?;
                }
            }
            Command::Open(id) => match self.catalog.find(id) {
                Some(product) => self.store.open_product_overlay(product),
                None => writeln!(output, "error: {}", StoreError::UnknownProduct(id))?,
            },
            Command::Close => self.store.close_product_overlay(),
            Command::Show => match self.store.selected_product() {
                Some(product) => {
                    writeln!(output, "{}", render_overlay(Some(&*product), &self.overlay))?
                }
                None => writeln!(output, "(no product selected)")?,
            },
            Command::Help => writeln!(output, "{}", HELP_TEXT)?,
            Command::Quit => return Ok(ControlFlow::Break(())),
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Store the session opens and closes the overlay through
    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    fn flush_events<W: Write>(&self, output: &mut W) -> Result<(), StoreError> {
        let events = std::mem::take(
            &mut *self
                .events
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        for event in events {
            writeln!(output, "{}", event)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;

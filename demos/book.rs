//! A book driven by a YAML-declared state machine.
//!
//! Demonstrates:
//! - Declaring states, transitions, and callbacks in a document
//! - Binding an external model with `model_binding!`
//! - Self-loop transitions (`forward`/`back` stay in `opened`)
//!
//! Run with: cargo run --example book

use statebound::{config, model_binding, share, FsmBuilder};

const BOOK_DOC: &str = "
    # a book with callbacks
    start_state: closed

    states:
        - name: closed
          on_enter: on_close

        - name: opened
          on_enter: on_open

    transitions:
        - action: open
          from_state: closed
          to_state: opened

        - action: forward
          from_state: opened
          to_state: opened
          on_before: on_forward

        - action: back
          from_state: opened
          to_state: opened
          on_before: on_back

        - action: close
          from_state: opened
          to_state: closed
";

struct Book {
    state: Option<String>,
    page_count: u32,
    page_num: u32,
    is_open: bool,
}

impl Book {
    fn new(page_count: u32) -> Self {
        Self {
            state: None,
            page_count,
            page_num: 1,
            is_open: false,
        }
    }

    fn on_open(&mut self) {
        self.is_open = true;
        self.show_status();
    }

    fn on_close(&mut self) {
        self.is_open = false;
        self.show_status();
    }

    fn on_forward(&mut self) {
        if self.page_num < self.page_count {
            self.page_num += 1;
        } else {
            println!("Already on last page.");
        }
        self.show_status();
    }

    fn on_back(&mut self) {
        if self.page_num > 1 {
            self.page_num -= 1;
        } else {
            println!("Already on first page.");
        }
        self.show_status();
    }

    fn show_status(&self) {
        if self.is_open {
            println!("The book is open to page {}", self.page_num);
        } else {
            println!("The book is closed.");
        }
    }
}

model_binding! {
    Book {
        state: state,
        callbacks: [on_open, on_close, on_forward, on_back],
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let book = share(Book::new(3));
    let mut fsm = FsmBuilder::new()
        .model(book.clone())
        .document(config::from_yaml(BOOK_DOC)?)?
        .build()?;

    book.borrow().show_status();
    fsm.perform("open")?;
    fsm.perform("forward")?;
    fsm.perform("back")?;
    fsm.perform("back")?;
    fsm.perform("forward")?;
    fsm.perform("forward")?;
    fsm.perform("forward")?;
    fsm.perform("close")?;

    // Turning pages is only valid while the book is open.
    assert!(fsm.perform("forward").is_err());
    println!("Done; the book ends {}.", fsm.state());
    Ok(())
}

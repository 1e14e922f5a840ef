//! Help decoration against an in-memory parser context.

use std::cell::{Cell, RefCell};
use std::io::{self, Write};

use cmdex::{App, ExamplesFinder, ExamplesFound, RenderContext, render_help};

const D1: &str = "Ius legimus nonumes te, pri dicat nominavi copiosae id, odio rebum facilis ea pro.";
const D2: &str = "At vis primis debitis, ei verear omittantur.";
const DEFAULT_HELP: &str = "Usage: app-name <command>\n";

/// Records every write; optionally fails on one exact write.
#[derive(Default)]
struct Sink {
    written: Vec<String>,
    fail_on: Option<&'static str>,
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf).into_owned();
        if self.fail_on == Some(text.as_str()) {
            return Err(io::Error::other("Test failover condition met"));
        }
        self.written.push(text);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct TestContext {
    name: &'static str,
    selected: Option<String>,
    out: Sink,
}

impl TestContext {
    fn new(args: &[&str]) -> Self {
        let selected = if args.is_empty() {
            None
        } else {
            Some(format!("app-name {}", args.join(" ")))
        };
        Self {
            name: "app-name",
            selected,
            out: Sink::default(),
        }
    }

    fn stdout(&self) -> String {
        self.out.written.concat()
    }
}

impl RenderContext for TestContext {
    fn program_name(&self) -> &str {
        self.name
    }

    fn selected_path(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    fn output(&mut self) -> &mut dyn Write {
        &mut self.out
    }
}

fn default_help(ctx: &mut TestContext) -> io::Result<()> {
    ctx.output().write_all(DEFAULT_HELP.as_bytes())
}

fn registry() -> App {
    let mut app = App::new("app-name");
    app.example("init", D1);
    app.example("config snapshot odio", D2);
    app.command("version").example("--json", D2);
    app.command("config").example("snapshot odio", D2);
    app.command("config snapshot").example("odio", D2);
    app.command("init");
    app
}

fn help_for(args: &[&str]) -> String {
    let app = registry();
    let mut ctx = TestContext::new(args);
    render_help(&app, default_help, &mut ctx).expect("render help");
    ctx.stdout()
}

// ============================================
// Rendered output
// ============================================

#[test]
fn renders_examples_for_app() {
    let expected = format!(
        "{DEFAULT_HELP}\nExamples:\n  app-name init\n    {D1}\n\n  app-name config snapshot odio\n    {D2}\n"
    );
    assert_eq!(help_for(&[]), expected);
}

#[test]
fn renders_examples_for_command() {
    let expected = format!("{DEFAULT_HELP}\nExamples:\n  app-name version --json\n    {D2}\n");
    assert_eq!(help_for(&["version"]), expected);
}

#[test]
fn renders_examples_for_sub_command() {
    let expected =
        format!("{DEFAULT_HELP}\nExamples:\n  app-name config snapshot odio\n    {D2}\n");
    assert_eq!(help_for(&["config", "snapshot"]), expected);
}

#[test]
fn renders_examples_for_part_of_sub_command() {
    let expected =
        format!("{DEFAULT_HELP}\nExamples:\n  app-name config snapshot odio\n    {D2}\n");
    assert_eq!(help_for(&["config"]), expected);
}

#[test]
fn command_without_examples_only_gets_default_help() {
    assert_eq!(help_for(&["init"]), DEFAULT_HELP);
}

#[test]
fn unknown_command_only_gets_default_help() {
    assert_eq!(help_for(&["nonexistent", "path"]), DEFAULT_HELP);
}

#[test]
fn examples_are_written_one_line_at_a_time() {
    let app = registry();
    let mut ctx = TestContext::new(&["version"]);
    render_help(&app, default_help, &mut ctx).expect("render help");

    assert_eq!(
        ctx.out.written,
        vec![
            DEFAULT_HELP.to_string(),
            "\n".to_string(),
            "Examples:\n".to_string(),
            "  app-name version --json\n".to_string(),
            format!("    {D2}\n"),
        ]
    );
}

// ============================================
// Failures
// ============================================

#[test]
fn write_failure_stops_at_failing_line() {
    let mut app = App::new("app-name");
    app.example("init", D1);

    let mut ctx = TestContext::new(&[]);
    ctx.out.fail_on = Some("Examples:\n");

    let err = render_help(&app, default_help, &mut ctx).expect_err("write should fail");
    assert_eq!(err.to_string(), "Test failover condition met");
    assert_eq!(ctx.stdout(), format!("{DEFAULT_HELP}\n"));
}

#[derive(Debug, PartialEq)]
enum RenderError {
    Model(&'static str),
    Io(String),
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        RenderError::Io(err.to_string())
    }
}

#[test]
fn default_renderer_failure_is_returned_unchanged() {
    let app = registry();
    let mut ctx = TestContext::new(&[]);

    let result = render_help(
        &app,
        |_: &mut TestContext| Err(RenderError::Model("malformed command model")),
        &mut ctx,
    );

    assert_eq!(result, Err(RenderError::Model("malformed command model")));
    assert!(ctx.out.written.is_empty());
}

// ============================================
// Alternative finders
// ============================================

/// Counts lookups and never has anything to show.
struct CountingFinder {
    lookups: Cell<usize>,
    last: RefCell<String>,
}

impl ExamplesFinder for CountingFinder {
    fn find(&self, command: &str) -> ExamplesFound<'_> {
        self.lookups.set(self.lookups.get() + 1);
        *self.last.borrow_mut() = command.to_string();
        ExamplesFound::none("app-name")
    }
}

#[test]
fn decorator_uses_any_finder_with_resolved_path() {
    let finder = CountingFinder {
        lookups: Cell::new(0),
        last: Default::default(),
    };
    let mut ctx = TestContext::new(&["config", "snapshot"]);

    render_help(&finder, default_help, &mut ctx).expect("render help");

    assert_eq!(finder.lookups.get(), 1);
    assert_eq!(finder.last.borrow().as_str(), "config snapshot");
    assert_eq!(ctx.stdout(), DEFAULT_HELP);
}

#[test]
fn decorator_accepts_trait_objects() {
    let app = registry();
    let finder: &dyn ExamplesFinder = &app;
    let mut ctx = TestContext::new(&["version"]);

    render_help(finder, default_help, &mut ctx).expect("render help");
    assert!(ctx.stdout().ends_with(&format!("  app-name version --json\n    {D2}\n")));
}

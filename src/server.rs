use crate::listing::list_directory;
use crate::protocol::{self, Request};
use crate::Result;
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};
use tracing::{debug, error};

type Handler = fn(&Request) -> Option<Value>;

// Operation name -> handler. Lines naming anything else produce no output.
static DISPATCH: &[(&str, Handler)] = &[
    ("initialize", handle_initialize),
    ("tools/list", handle_tools_list),
    ("tools/call", handle_tools_call),
];

pub struct Server;

impl Server {
    pub fn new() -> Self {
        Self
    }

    /// Serve on locked stdin/stdout until the input reaches end-of-file.
    pub fn run(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// One request in, one response out, strictly in order. Every handled
    /// line is fully processed and its response flushed before the next
    /// line is read.
    pub fn serve<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Result<()> {
        write_frame(&mut writer, &protocol::initialized_frame())?;

        for line in reader.lines() {
            let line = line?;
            let req = match Request::parse(&line) {
                Some(req) => req,
                None => continue,
            };
            let handler = DISPATCH
                .iter()
                .find(|(name, _)| *name == req.method)
                .map(|(_, handler)| *handler);
            let handler = match handler {
                Some(h) => h,
                None => continue,
            };
            debug!("Dispatching request id={} method={}", req.id, req.method);
            if let Some(frame) = handler(&req) {
                write_frame(&mut writer, &frame)?;
            }
        }
        Ok(())
    }
}

fn write_frame<W: Write>(writer: &mut W, frame: &Value) -> Result<()> {
    let line = serde_json::to_string(frame)?;
    writeln!(writer, "{}", line)?;
    writer.flush()?;
    Ok(())
}

fn handle_initialize(req: &Request) -> Option<Value> {
    Some(protocol::result_frame(
        req.id,
        json!({
            "protocolVersion": "2024-11-05",
            "capabilities": { "tools": { "listChanged": true } },
            "serverInfo": { "name": "fsmeta", "version": env!("CARGO_PKG_VERSION") }
        }),
    ))
}

fn handle_tools_list(req: &Request) -> Option<Value> {
    Some(protocol::result_frame(req.id, tool_definitions()))
}

// Static description of the one supported tool; not derived by introspection.
fn tool_definitions() -> Value {
    json!([
        {
            "name": "list_files",
            "description": "List all files in a directory",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "directory": { "type": "string", "description": "Directory path" }
                },
                "required": ["directory"]
            }
        }
    ])
}

fn handle_tools_call(req: &Request) -> Option<Value> {
    match req.tool_name() {
        Some("list_files") => Some(handle_list_files(req)),
        // Unknown tools are dropped, the same as unknown methods.
        _ => None,
    }
}

fn handle_list_files(req: &Request) -> Value {
    let directory = match req.argument("directory") {
        Some(d) => d,
        None => {
            return protocol::error_frame(req.id, "invalid_params", "Missing directory parameter")
        }
    };
    debug!("Listing directory: {}", directory);
    match list_directory(directory) {
        Ok(records) => protocol::result_frame(req.id, json!(records)),
        Err(e) => {
            error!("Listing failed for {}: {}", directory, e);
            protocol::error_frame(req.id, "directory_error", "Cannot open directory")
        }
    }
}

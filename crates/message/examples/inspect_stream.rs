//! Opens a file (or standard input) as a stream and prints what the stream knows about it.
//!
//! ```text
//! cargo run --example inspect_stream -- ./body.json get '/upload?name=my file'
//! ```

use std::env;
use std::io;

use micro_message::normalize::{normalize_method, normalize_request_target, normalize_uri_query};
use micro_message::stream::{Handle, Stream};
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut args = env::args().skip(1);

    let handle = match args.next().as_deref() {
        None | Some("-") => Handle::reader(io::stdin()),
        Some(path) => match Handle::open(path, "r") {
            Ok(handle) => handle,
            Err(e) => {
                error!(cause = %e, path, "open body error");
                return;
            }
        },
    };

    let mut stream = match Stream::new(handle) {
        Ok(stream) => stream,
        Err(e) => {
            error!(cause = %e, "attach body error");
            return;
        }
    };

    info!(
        size = ?stream.size(),
        readable = stream.is_readable(),
        writable = stream.is_writable(),
        seekable = stream.is_seekable(),
        "stream capabilities"
    );
    if let Some(meta) = stream.metadata() {
        info!(mode = %meta.mode, stream_type = %meta.stream_type, uri = ?meta.uri, "stream metadata");
    }

    match stream.contents() {
        Ok(contents) => info!(len = contents.len(), body = %String::from_utf8_lossy(&contents), "stream contents"),
        Err(e) => error!(cause = %e, "read body error"),
    }

    match normalize_method(args.next().as_deref()) {
        Ok(method) => info!(?method, "normalized method"),
        Err(e) => error!(cause = %e, "invalid method"),
    }

    if let Some(target) = args.next() {
        let (path, query) = target.split_once('?').unwrap_or((target.as_str(), ""));
        let query = normalize_uri_query(query);
        match normalize_request_target(path) {
            Ok(path) => info!(path, query = %query, "normalized request target"),
            Err(e) => error!(cause = %e, "invalid request target"),
        }
    }

    if let Err(e) = stream.close() {
        error!(cause = %e, "close body error");
    }
}

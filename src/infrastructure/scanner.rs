//! Barcode scanner integration.
//!
//! Decoding itself happens in the scanner hardware. What arrives here is
//! the decoded string, one per successful read. A keyboard-wedge scanner
//! types into the terminal and is handled by the input layer; a scanner
//! exposed as a serial or HID character device can be read line by line
//! with [`spawn_device_reader`]. Either way a decode becomes an
//! [`Intent::Detected`] on the same queue as every other event.

use crate::application::Intent;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use tracing::{debug, info, warn};

/// The detection callback handed to a scanner source.
#[derive(Clone)]
pub struct DetectionSink {
    events: Sender<Intent>,
}

impl DetectionSink {
    pub fn new(events: Sender<Intent>) -> Self {
        Self { events }
    }

    /// Delivers one decoded read. Returns false once nobody is listening.
    pub fn on_detected(&self, code: String) -> bool {
        debug!(code = code.as_str(), "barcode decoded");
        self.events.send(Intent::Detected(code)).is_ok()
    }
}

/// Forwards every non-blank line from `reader` as one decode.
///
/// Stops at end of input, on a read error, or when the sink is closed.
/// Returns the number of decodes delivered.
pub fn forward_decodes<R: BufRead>(reader: R, sink: &DetectionSink) -> usize {
    let mut delivered = 0;
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                warn!(%error, "scanner read failed");
                break;
            }
        };
        let code = line.trim();
        if code.is_empty() {
            continue;
        }
        if !sink.on_detected(code.to_string()) {
            break;
        }
        delivered += 1;
    }
    delivered
}

/// Opens a scanner device and forwards its decodes on a background thread.
pub fn spawn_device_reader(path: PathBuf, sink: DetectionSink) -> io::Result<JoinHandle<usize>> {
    let file = File::open(&path)?;
    info!(device = %path.display(), "reading barcodes from device");
    thread::Builder::new()
        .name("scanner".to_string())
        .spawn(move || {
            let delivered = forward_decodes(BufReader::new(file), &sink);
            info!(device = %path.display(), delivered, "scanner device closed");
            delivered
        })
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use objscope::{
    runtime::{NullUnarchiver, RuntimeObject},
    transcode::{hex_from_bytes, string_from_hex, utf8_from_bytes},
    Decoder,
};

struct Buffer<'a>(&'a [u8]);

impl RuntimeObject for Buffer<'_> {
    fn class_tag(&self) -> &str {
        "__NSCFData"
    }

    fn display_string(&self) -> String {
        format!("<{} bytes>", self.0.len())
    }

    fn byte_length(&self) -> objscope::Result<usize> {
        Ok(self.0.len())
    }

    fn raw_bytes(&self) -> objscope::Result<&[u8]> {
        Ok(self.0)
    }
}

fuzz_target!(|data: &[u8]| {
    let _ = hex_from_bytes(data);
    let _ = utf8_from_bytes(data, data.len());
    let _ = utf8_from_bytes(data, usize::MAX);

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = string_from_hex(text);
    }
    let _ = string_from_hex(&hex_from_bytes(data));

    let decoder = Decoder::new(&NullUnarchiver);
    let _ = decoder.decode(Some(&Buffer(data)));
});

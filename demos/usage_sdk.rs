use brle::config::{BrleConfig, StreamFormat};
use brle::display::format_buffer;
use brle::{decode, encode, pipeline, summarize};

fn main() {
	let data = [0x03u8, 0x74, 0x04, 0x04, 0x04, 0x35, 0x35, 0xC8, 0xC8, 0x00];
	let encoded = encode(&data);
	println!("before:  {}", format_buffer(&data));
	println!("encoded: {}", format_buffer(&encoded));
	println!("after:   {}", format_buffer(&decode(&encoded).unwrap()));

	let summary = summarize(&encoded).unwrap();
	println!("{} literals, {} runs ({} escaped)", summary.literals, summary.runs, summary.escaped_runs);

	let text = b"hello hello hello hello".to_vec();
	let mut input = std::io::Cursor::new(text);
	let mut compressed = Vec::new();
	let cfg = BrleConfig::default().with_format(StreamFormat::Framed);
	let stats = pipeline::compress(&mut input, &mut compressed, &cfg).unwrap();
	println!("framed {} -> {}", stats.original_size, stats.compressed_size);

	let mut comp_cur = std::io::Cursor::new(compressed);
	let mut restored = Vec::new();
	pipeline::decompress(&mut comp_cur, &mut restored, cfg.format).unwrap();
	println!("restored {} bytes", restored.len());
}

//! Basic usage of the buffer logger: mixed text, integer and binary records
//! written into a stack buffer, then scanned back.

use logbuf::{IntFormat, Logger, RecordScanner};

fn main() {
    let mut buf = [0u8; 256];
    let mut logger = Logger::new(&mut buf);

    logger.log_str("User logged in: ").unwrap();
    logger.log_str("john_doe").unwrap();
    logger.log_str(" at timestamp: ").unwrap();
    logger.log_int(1_701_436_800u64).unwrap();

    // Raw binary data, no terminator.
    let binary_data = [0xDEu8, 0xAD, 0xBE, 0xEF];
    logger.log_bytes(&binary_data).unwrap();

    // Session id rendered in hex via the fluent chain.
    logger
        .push("session: ")
        .push(IntFormat::HexLower)
        .push(0xC0FFEEu32);

    println!("Bytes written:      {}", logger.bytes_written());
    println!("Remaining capacity: {}", logger.remaining_capacity());
    println!(
        "Has overflowed:     {}",
        if logger.has_overflowed() { "yes" } else { "no" }
    );

    println!("\nBuffer contents (text records):");
    let mut scanner = RecordScanner::new(logger.as_slice());
    let mut index = 0;
    for _ in 0..4 {
        if let Some(entry) = scanner.next_str() {
            println!("  Entry {index}: {entry}");
            index += 1;
        }
    }

    // The binary span is not self-delimiting; skip it by its known length.
    scanner.skip(binary_data.len()).unwrap();
    while let Some(entry) = scanner.next_str() {
        println!("  Entry {index}: {entry}");
        index += 1;
    }

    // Reset and reuse the same buffer.
    logger.reset();
    logger.log_str("Buffer reused!").unwrap();

    let mut scanner = RecordScanner::new(logger.as_slice());
    println!("\nAfter reset: {}", scanner.next_str().unwrap());
}

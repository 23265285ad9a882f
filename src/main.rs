/*!
 * Blockpool Demo - Main Entry Point
 *
 * Walks the allocator through the classic driver sequence: allocate a
 * buffer, fill and print it, grow it with resize, release it, and report
 * the block list after each step.
 */

use std::error::Error;

use blockpool::BlockManager;

fn print_blocks(manager: &BlockManager) {
    println!("Memory blocks:");
    for (index, block) in manager.blocks().iter().enumerate() {
        println!(
            "  Block {}: address: 0x{:x}, size: {}, free: {}",
            index + 1,
            block.address,
            block.size,
            block.is_free
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut manager = BlockManager::new();

    // Allocate room for five little-endian u32 values
    let numbers = manager.allocate(5 * 4)?;
    for i in 0..5u32 {
        manager.write_bytes(numbers, (i as usize) * 4, &(i + 1).to_le_bytes())?;
    }

    let content = manager.read_bytes(numbers, 0, 5 * 4)?;
    for chunk in content.chunks_exact(4) {
        print!("{} ", u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }
    println!();

    println!("Memory blocks after initial allocation:");
    print_blocks(&manager);

    // Grow the buffer; content must carry over
    let resized = manager.resize(Some(numbers), 10 * 4)?;
    for i in 5..10u32 {
        manager.write_bytes(resized, (i as usize) * 4, &(i + 1).to_le_bytes())?;
    }

    let content = manager.read_bytes(resized, 0, 10 * 4)?;
    for chunk in content.chunks_exact(4) {
        print!("{} ", u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }
    println!();

    println!("Memory blocks after reallocation:");
    print_blocks(&manager);

    manager.release(Some(resized))?;

    println!("Memory blocks after release:");
    print_blocks(&manager);

    println!("Total allocated memory: {} bytes", manager.total_allocated());

    Ok(())
}

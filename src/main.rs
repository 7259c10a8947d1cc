use NaturalQueueMini::core::buildcore::TextQueueSystem;
use NaturalQueueMini::core::log::append_logs;

fn main() {
    let mut system = TextQueueSystem::create().expect("Failed to create queue system");

    // Load a batch of file-style names that lexicographic order would scramble
    for i in (1..=12).rev() {
        system.insert_tail(&format!("shot{}.png", i));
    }
    system.insert_head("cover.png");
    println!("loaded:   {:?}", system.values());

    // Natural order puts shot2 before shot10
    system.sort();
    println!("sorted:   {:?}", system.values());

    system.reverse();
    println!("reversed: {:?}", system.values());

    // Drain a few values through a small fixed-size buffer
    let mut buf = [0u8; 8];
    while system.size() > 10 {
        if system.remove_head(Some(&mut buf)) {
            let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
            println!("removed:  {}", String::from_utf8_lossy(&buf[..end]));
        }
    }

    system.destroy();

    // Print the operation trail in its Display form
    // Append the same entries as NDJSON
    for entry in system.logs() {
        println!("{entry}");
    }
    append_logs(&system.logs(), "output.ndjson").expect("Failed to append logs");
}

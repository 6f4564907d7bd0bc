//! Plain-text rendering of inventory listings.

use hotelinv_core::{Hotel, InventoryService, Room, RoomStats, UNKNOWN_HOTEL_LABEL};

pub fn print_hotels<'a>(hotels: impl Iterator<Item = &'a Hotel>) {
    println!("{:>4}  {:<24} {:<16} {:<28} {:<5} pool", "id", "name", "city", "address", "stars");
    for hotel in hotels {
        println!(
            "{:>4}  {:<24} {:<16} {:<28} {:<5} {}",
            hotel.id,
            hotel.name,
            hotel.city,
            hotel.address,
            "*".repeat(usize::from(hotel.stars)),
            if hotel.has_pool { "yes" } else { "no" }
        );
    }
}

pub fn print_rooms<'a>(service: &InventoryService, rooms: impl Iterator<Item = &'a Room>) {
    println!("{:>4}  {:<28} {:<8} {:<16} {:>10} status", "id", "hotel", "number", "type", "price");
    for room in rooms {
        let hotel = service
            .hotel_label(room.hotel_id)
            .unwrap_or_else(|| UNKNOWN_HOTEL_LABEL.to_string());
        println!(
            "{:>4}  {:<28} {:<8} {:<16} {:>10.2} {}",
            room.id,
            hotel,
            room.room_number,
            room.room_type,
            room.price_per_night,
            if room.is_available { "available" } else { "occupied" }
        );
    }
}

pub fn print_stats(stats: &RoomStats) {
    println!("total:     {}", stats.total);
    println!("available: {}", stats.available);
    println!("occupied:  {}", stats.occupied);
    for (room_type, count) in &stats.by_type {
        println!("  {room_type}: {count}");
    }
}

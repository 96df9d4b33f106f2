use restapi_domain::{Entity, ID};
use std::sync::Mutex;

// Useful functions for creating inmemory repositories

/// Replaces the stored value with the same id, or appends `val`
/// if there is none
pub fn save<T: Clone + Entity>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    match collection.iter().position(|item| item.id() == val.id()) {
        Some(i) => collection[i] = val.clone(),
        None => collection.push(val.clone()),
    }
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let collection = collection.lock().unwrap();
    collection
        .iter()
        .find(|item| item.id() == Some(val_id))
        .cloned()
}

pub fn find_all<T: Clone>(collection: &Mutex<Vec<T>>) -> Vec<T> {
    collection.lock().unwrap().clone()
}

pub fn delete<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let mut collection = collection.lock().unwrap();
    let index = collection
        .iter()
        .position(|item| item.id() == Some(val_id))?;
    Some(collection.remove(index))
}

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Window;

use crate::error::Result;
use crate::schedule::{EventQueue, Schedule};

/// Registers every task of `schedule` with `setInterval`.
///
/// The callbacks only enqueue; the render loop applies the events. The
/// intervals are never cleared. Returns the interval handles.
pub fn register(window: &Window, schedule: &Schedule, queue: &EventQueue) -> Result<Vec<i32>> {
    let mut handles = Vec::new();
    for task in schedule.tasks() {
        let producer = queue.clone();
        let event = task.event;
        let callback = Closure::<dyn FnMut()>::new(move || producer.push(event));
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            task.period_millis(),
        )?;
        callback.forget();
        log::debug!("{:?} every {:?} (interval {handle})", task.event, task.period);
        handles.push(handle);
    }
    Ok(handles)
}

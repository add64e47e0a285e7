use super::request::Request;

/// Ordered backlog of unresolved hall requests. Insertion deduplicates,
/// removal keeps the relative order of the remaining entries.
#[derive(Debug, Clone)]
pub struct RequestBuffer {
    requests: Vec<Request>,
}

impl RequestBuffer {
    pub fn new() -> Self {
        RequestBuffer {
            requests: Vec::new(),
        }
    }

    pub fn insert_request(&mut self, request: Request) {
        for existing in &self.requests {
            if *existing == request {
                return;
            }
        }
        self.requests.push(request);
    }

    pub fn remove_request(&mut self, request: Request) {
        for index in 0..self.requests.len() {
            if self.requests[index] == request {
                self.requests.remove(index);
                return;
            }
        }
    }

    pub fn front(&self) -> Option<Request> {
        self.requests.first().copied()
    }

    pub fn get_requests(&self) -> Vec<Request> {
        self.requests.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::Call;

    #[test]
    fn insert_deduplicates_identical_requests() {
        let mut buffer = RequestBuffer::new();
        buffer.insert_request(Request { floor: 1, call: Call::HallUp });
        buffer.insert_request(Request { floor: 1, call: Call::HallUp });
        assert_eq!(buffer.get_requests().len(), 1);
    }

    #[test]
    fn insert_keeps_same_floor_other_direction() {
        let mut buffer = RequestBuffer::new();
        buffer.insert_request(Request { floor: 1, call: Call::HallUp });
        buffer.insert_request(Request { floor: 1, call: Call::HallDown });
        assert_eq!(buffer.get_requests().len(), 2);
    }

    #[test]
    fn front_returns_oldest_request() {
        let mut buffer = RequestBuffer::new();
        assert_eq!(buffer.front(), None);
        buffer.insert_request(Request { floor: 2, call: Call::HallDown });
        buffer.insert_request(Request { floor: 0, call: Call::HallUp });
        assert_eq!(buffer.front(), Some(Request { floor: 2, call: Call::HallDown }));
    }

    #[test]
    fn remove_preserves_order_of_remaining_requests() {
        let mut buffer = RequestBuffer::new();
        buffer.insert_request(Request { floor: 0, call: Call::HallUp });
        buffer.insert_request(Request { floor: 2, call: Call::HallDown });
        buffer.insert_request(Request { floor: 1, call: Call::HallUp });
        buffer.remove_request(Request { floor: 2, call: Call::HallDown });
        let requests = buffer.get_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], Request { floor: 0, call: Call::HallUp });
        assert_eq!(requests[1], Request { floor: 1, call: Call::HallUp });
    }

    #[test]
    fn remove_of_absent_request_does_nothing() {
        let mut buffer = RequestBuffer::new();
        buffer.insert_request(Request { floor: 0, call: Call::HallUp });
        buffer.remove_request(Request { floor: 3, call: Call::HallDown });
        assert_eq!(buffer.get_requests().len(), 1);
    }
}

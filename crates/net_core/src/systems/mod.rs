pub mod frame_status;
pub mod packet_step;

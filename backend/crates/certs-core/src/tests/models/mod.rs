mod certificate;
mod transfer;
mod transfer_status;

pub mod u501_timesheet_download;
